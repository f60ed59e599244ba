pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod reorder;
pub mod types;
pub mod update;
