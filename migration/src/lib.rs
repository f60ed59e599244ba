pub use sea_orm_migration::prelude::*;

mod m20241005_000001_create_users_table;
mod m20241005_000002_create_dashboards_table;
mod m20241012_000001_create_cards_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241005_000001_create_users_table::Migration),
            Box::new(m20241005_000002_create_dashboards_table::Migration),
            Box::new(m20241012_000001_create_cards_table::Migration),
        ]
    }
}
