use chrono::{DateTime, FixedOffset};
use sea_orm::{DerivePartialModel, FromQueryResult};

use entities::{card, prelude::Card, sea_orm_active_enums::CardTypeEnum};
use reorder::Orderable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, DerivePartialModel, FromQueryResult, PartialEq, Debug, Clone)]
#[sea_orm(entity = "Card")]
pub struct CardVisible {
    pub id: uuid::Uuid,
    pub dashboard_id: uuid::Uuid,
    pub card_type: CardTypeEnum,
    pub title: String,
    pub values: serde_json::Value,
    pub position: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<&card::Model> for CardVisible {
    fn from(item: &card::Model) -> Self {
        CardVisible {
            id: item.id,
            dashboard_id: item.dashboard_id,
            card_type: item.card_type.clone(),
            title: item.title.clone(),
            values: item.values.clone(),
            position: item.position,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<card::Model> for CardVisible {
    fn from(item: card::Model) -> Self {
        CardVisible::from(&item)
    }
}

impl Orderable for CardVisible {
    type Id = uuid::Uuid;

    fn order_id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct CardCreateRequest {
    pub card_type: CardTypeEnum,
    pub title: String,
    pub values: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct CardUpdateRequest {
    pub title: String,
    pub values: serde_json::Value,
}

pub type CardReorderRequest = reorder::ReorderRequest<uuid::Uuid>;
pub type CardOrderObject = reorder::OrderObject<uuid::Uuid>;
