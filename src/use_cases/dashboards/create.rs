use db_adapters::dashboard_adapter::{
    CreateDashboardParams, DashboardAdapter, DashboardFilter, DashboardMutation, DashboardQuery,
};
use entities::user as user_entity;

use crate::{
    dashboards::types::{DashboardCreateRequest, DashboardVisible},
    error_500, UseCaseError,
};

pub async fn create_dashboard<'a>(
    user: user_entity::Model,
    params: DashboardCreateRequest,
    dashboard_adapter: DashboardAdapter<'a>,
) -> Result<DashboardVisible, UseCaseError> {
    if params.title.trim().is_empty() {
        return Err(UseCaseError::BadRequest(
            "Title must not be empty.".to_string(),
        ));
    }

    // New dashboards go after the current last one, gaps included.
    let position = dashboard_adapter
        .clone()
        .filter_eq_user(&user)
        .get_max_position()
        .await
        .map_err(error_500)?
        .map_or(0, |max| max + 1);

    dashboard_adapter
        .create(CreateDashboardParams {
            title: params.title.clone(),
            is_public: params.is_public.unwrap_or(false),
            position,
            user_id: user.id,
        })
        .await
        .map(DashboardVisible::from)
        .map_err(error_500)
}
