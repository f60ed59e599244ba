use crate::{dashboards::types::DashboardVisible, error_500, UseCaseError};
use db_adapters::{
    dashboard_adapter::{DashboardAdapter, DashboardFilter, DashboardOrder, DashboardQuery},
    Order::{Asc, Desc},
};
use entities::user as user_entity;

pub async fn list_dashboards<'a>(
    user: user_entity::Model,
    dashboard_adapter: DashboardAdapter<'a>,
) -> Result<Vec<DashboardVisible>, UseCaseError> {
    dashboard_adapter
        .filter_eq_user(&user)
        .order_by_position(Asc)
        .order_by_updated_at(Desc)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|dashboards| {
            dashboards
                .iter()
                .map(DashboardVisible::from)
                .collect::<Vec<_>>()
        })
        .map_err(error_500)
}
