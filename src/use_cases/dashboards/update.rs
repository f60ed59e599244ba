use uuid::Uuid;

use crate::{
    dashboards::types::{DashboardUpdateRequest, DashboardVisible},
    error_500, UseCaseError,
};
use db_adapters::dashboard_adapter::{
    DashboardAdapter, DashboardFilter, DashboardMutation, DashboardQuery, UpdateDashboardParams,
};
use entities::user as user_entity;

pub async fn update_dashboard<'a>(
    user: user_entity::Model,
    params: DashboardUpdateRequest,
    dashboard_id: Uuid,
    dashboard_adapter: DashboardAdapter<'a>,
) -> Result<DashboardVisible, UseCaseError> {
    if params.title.trim().is_empty() {
        return Err(UseCaseError::BadRequest(
            "Title must not be empty.".to_string(),
        ));
    }

    let dashboard = dashboard_adapter
        .clone()
        .filter_eq_user(&user)
        .get_by_id(dashboard_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound("Dashboard not found".to_string()))?;

    dashboard_adapter
        .update(
            dashboard,
            UpdateDashboardParams {
                title: params.title.clone(),
                is_public: params.is_public,
            },
        )
        .await
        .map(DashboardVisible::from)
        .map_err(error_500)
}
