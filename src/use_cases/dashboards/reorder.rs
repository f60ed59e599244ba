use db_adapters::dashboard_adapter::{DashboardAdapter, DashboardMutation};
use entities::user as user_entity;

use crate::{
    dashboards::types::{DashboardOrderObject, DashboardReorderRequest},
    error_500,
    ordering::validate_order_objects,
    UseCaseError,
};

/// Positions are written as sent; gaps and values past the list length are
/// fine since only their relative order matters. Ids the user does not own are
/// dropped from the update without an error, and the response lists only the
/// rows that were written. Without a session user nothing is written.
pub async fn reorder_dashboards<'a>(
    user: Option<user_entity::Model>,
    params: DashboardReorderRequest,
    dashboard_adapter: DashboardAdapter<'a>,
) -> Result<Vec<DashboardOrderObject>, UseCaseError> {
    let positions = validate_order_objects(&params.order_objects)?;
    let user = match user {
        Some(user) => user,
        None => return Ok(vec![]),
    };

    dashboard_adapter
        .reorder(&user, positions)
        .await
        .map(|dashboards| {
            dashboards
                .into_iter()
                .map(|dashboard| DashboardOrderObject {
                    id: dashboard.id,
                    position: dashboard.position,
                })
                .collect::<Vec<_>>()
        })
        .map_err(error_500)
}
