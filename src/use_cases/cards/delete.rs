use uuid::Uuid;

use db_adapters::card_adapter::{CardAdapter, CardFilter, CardMutation, CardQuery};
use entities::user as user_entity;

use crate::{error_500, UseCaseError};

pub async fn delete_card<'a>(
    user: user_entity::Model,
    card_id: Uuid,
    card_adapter: CardAdapter<'a>,
) -> Result<(), UseCaseError> {
    let card = match card_adapter
        .clone()
        .filter_owned_by(&user)
        .get_by_id(card_id)
        .await
        .map_err(error_500)?
    {
        Some(card) => card,
        None => return Ok(()),
    };

    card_adapter.delete(card).await.map_err(error_500)
}
