use chrono::{DateTime, FixedOffset};
use sea_orm::{DerivePartialModel, FromQueryResult};

use entities::{dashboard, prelude::Dashboard};
use reorder::Orderable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, DerivePartialModel, FromQueryResult, PartialEq, Debug, Clone)]
#[sea_orm(entity = "Dashboard")]
pub struct DashboardVisible {
    pub id: uuid::Uuid,
    pub title: String,
    pub is_public: bool,
    pub position: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<&dashboard::Model> for DashboardVisible {
    fn from(item: &dashboard::Model) -> Self {
        DashboardVisible {
            id: item.id,
            title: item.title.clone(),
            is_public: item.is_public,
            position: item.position,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<dashboard::Model> for DashboardVisible {
    fn from(item: dashboard::Model) -> Self {
        DashboardVisible::from(&item)
    }
}

impl Orderable for DashboardVisible {
    type Id = uuid::Uuid;

    fn order_id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct DashboardCreateRequest {
    pub title: String,
    pub is_public: Option<bool>,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct DashboardUpdateRequest {
    pub title: String,
    pub is_public: bool,
}

pub type DashboardReorderRequest = reorder::ReorderRequest<uuid::Uuid>;
pub type DashboardOrderObject = reorder::OrderObject<uuid::Uuid>;
