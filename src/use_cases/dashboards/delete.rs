use uuid::Uuid;

use db_adapters::dashboard_adapter::{
    DashboardAdapter, DashboardFilter, DashboardMutation, DashboardQuery,
};
use entities::user as user_entity;

use crate::{error_500, UseCaseError};

pub async fn delete_dashboard<'a>(
    user: user_entity::Model,
    dashboard_id: Uuid,
    dashboard_adapter: DashboardAdapter<'a>,
) -> Result<(), UseCaseError> {
    let dashboard = match dashboard_adapter
        .clone()
        .filter_eq_user(&user)
        .get_by_id(dashboard_id)
        .await
        .map_err(error_500)?
    {
        Some(dashboard) => dashboard,
        None => return Ok(()),
    };

    dashboard_adapter.delete(dashboard).await.map_err(error_500)
}
