use chrono::Utc;
use entities::{card, sea_orm_active_enums::CardTypeEnum};
use sea_orm::Set;
use uuid::Uuid;

pub fn card(dashboard_id: Uuid) -> card::ActiveModel {
    let id = Uuid::now_v7();
    let now = Utc::now();
    card::ActiveModel {
        id: Set(id),
        dashboard_id: Set(dashboard_id),
        card_type: Set(CardTypeEnum::PriceTicker),
        title: Set(format!("card-{}", id)),
        values: Set(serde_json::json!({})),
        position: Set(0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait CardFactory {
    fn card_type(self, card_type: CardTypeEnum) -> card::ActiveModel;
    fn values(self, values: serde_json::Value) -> card::ActiveModel;
    fn position(self, position: i32) -> card::ActiveModel;
}

impl CardFactory for card::ActiveModel {
    fn card_type(mut self, card_type: CardTypeEnum) -> card::ActiveModel {
        self.card_type = Set(card_type);
        self
    }

    fn values(mut self, values: serde_json::Value) -> card::ActiveModel {
        self.values = Set(values);
        self
    }

    fn position(mut self, position: i32) -> card::ActiveModel {
        self.position = Set(position);
        self
    }
}
