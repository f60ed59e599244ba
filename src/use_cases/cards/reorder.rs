use db_adapters::card_adapter::{CardAdapter, CardMutation};
use entities::user as user_entity;

use crate::{
    cards::types::{CardOrderObject, CardReorderRequest},
    error_500,
    ordering::validate_order_objects,
    UseCaseError,
};

pub async fn reorder_cards<'a>(
    user: Option<user_entity::Model>,
    params: CardReorderRequest,
    card_adapter: CardAdapter<'a>,
) -> Result<Vec<CardOrderObject>, UseCaseError> {
    let positions = validate_order_objects(&params.order_objects)?;
    let user = match user {
        Some(user) => user,
        None => return Ok(vec![]),
    };

    card_adapter
        .reorder(&user, positions)
        .await
        .map(|cards| {
            cards
                .into_iter()
                .map(|card| CardOrderObject {
                    id: card.id,
                    position: card.position,
                })
                .collect::<Vec<_>>()
        })
        .map_err(error_500)
}
