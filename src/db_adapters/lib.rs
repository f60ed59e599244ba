pub mod card_adapter;
pub mod dashboard_adapter;
mod ordering;
pub mod user_adapter;

pub use sea_orm::Order;
