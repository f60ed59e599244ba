use uuid::Uuid;

use crate::{
    cards::types::{CardUpdateRequest, CardVisible},
    error_500, UseCaseError,
};
use db_adapters::card_adapter::{
    CardAdapter, CardFilter, CardMutation, CardQuery, UpdateCardParams,
};
use entities::user as user_entity;

pub async fn update_card<'a>(
    user: user_entity::Model,
    params: CardUpdateRequest,
    card_id: Uuid,
    card_adapter: CardAdapter<'a>,
) -> Result<CardVisible, UseCaseError> {
    if params.title.trim().is_empty() {
        return Err(UseCaseError::BadRequest(
            "Title must not be empty.".to_string(),
        ));
    }

    let card = card_adapter
        .clone()
        .filter_owned_by(&user)
        .get_by_id(card_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound("Card not found".to_string()))?;

    card_adapter
        .update(
            card,
            UpdateCardParams {
                title: params.title,
                values: params.values,
            },
        )
        .await
        .map(CardVisible::from)
        .map_err(error_500)
}
