use uuid::Uuid;

use crate::{cards::types::CardVisible, error_500, UseCaseError};
use db_adapters::{
    card_adapter::{CardAdapter, CardFilter, CardOrder, CardQuery},
    dashboard_adapter::{DashboardAdapter, DashboardFilter, DashboardQuery},
    Order::{Asc, Desc},
};
use entities::user as user_entity;

/// Cards of a dashboard the user owns, or of any public dashboard.
pub async fn list_cards<'a>(
    user: user_entity::Model,
    dashboard_id: Uuid,
    dashboard_adapter: DashboardAdapter<'a>,
    card_adapter: CardAdapter<'a>,
) -> Result<Vec<CardVisible>, UseCaseError> {
    let dashboard = dashboard_adapter
        .filter_visible_to(&user)
        .get_by_id(dashboard_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound("Dashboard not found".to_string()))?;

    card_adapter
        .filter_eq_dashboard(&dashboard)
        .order_by_position(Asc)
        .order_by_updated_at(Desc)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|cards| cards.iter().map(CardVisible::from).collect::<Vec<_>>())
        .map_err(error_500)
}
