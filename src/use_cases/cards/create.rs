use uuid::Uuid;

use db_adapters::{
    card_adapter::{CardAdapter, CardFilter, CardMutation, CardQuery, CreateCardParams},
    dashboard_adapter::{DashboardAdapter, DashboardFilter, DashboardQuery},
};
use entities::user as user_entity;

use crate::{
    cards::types::{CardCreateRequest, CardVisible},
    error_500, UseCaseError,
};

pub async fn create_card<'a>(
    user: user_entity::Model,
    dashboard_id: Uuid,
    params: CardCreateRequest,
    dashboard_adapter: DashboardAdapter<'a>,
    card_adapter: CardAdapter<'a>,
) -> Result<CardVisible, UseCaseError> {
    if params.title.trim().is_empty() {
        return Err(UseCaseError::BadRequest(
            "Title must not be empty.".to_string(),
        ));
    }

    let dashboard = dashboard_adapter
        .filter_eq_user(&user)
        .get_by_id(dashboard_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound("Dashboard not found".to_string()))?;

    // New cards go after the current last one, gaps included.
    let position = card_adapter
        .clone()
        .filter_eq_dashboard(&dashboard)
        .get_max_position()
        .await
        .map_err(error_500)?
        .map_or(0, |max| max + 1);

    card_adapter
        .create(CreateCardParams {
            dashboard_id: dashboard.id,
            card_type: params.card_type,
            title: params.title,
            values: params.values.unwrap_or(serde_json::json!({})),
            position,
        })
        .await
        .map(CardVisible::from)
        .map_err(error_500)
}
