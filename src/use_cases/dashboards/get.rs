use uuid::Uuid;

use crate::{dashboards::types::DashboardVisible, error_500, UseCaseError};
use db_adapters::dashboard_adapter::{DashboardAdapter, DashboardFilter, DashboardQuery};
use entities::user as user_entity;

/// Owners always see their dashboards; anyone else only public ones.
pub async fn get_dashboard<'a>(
    user: user_entity::Model,
    dashboard_id: Uuid,
    dashboard_adapter: DashboardAdapter<'a>,
) -> Result<DashboardVisible, UseCaseError> {
    dashboard_adapter
        .filter_visible_to(&user)
        .get_by_id(dashboard_id)
        .await
        .map_err(error_500)?
        .map(DashboardVisible::from)
        .ok_or(UseCaseError::NotFound("Dashboard not found".to_string()))
}
