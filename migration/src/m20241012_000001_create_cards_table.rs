use sea_orm_migration::{
    prelude::{
        async_trait,
        extension::postgres::Type,
        sea_orm::{self, DeriveIden, EnumIter, Iden, Iterable},
        Alias, DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index,
        MigrationTrait, SchemaManager, Table,
    },
    schema::{enumeration, integer, json, string, timestamp_with_time_zone, uuid},
};

const INDEX_NAME: &str = "cards_dashboard_id_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(CardTypeEnum)
                    .values(CardTypeVariants::iter())
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(uuid(Card::Id).primary_key())
                    .col(uuid(Card::DashboardId))
                    .col(enumeration(
                        Card::CardType,
                        Alias::new(CardTypeEnum.to_string()),
                        CardTypeVariants::iter(),
                    ))
                    .col(string(Card::Title))
                    .col(json(Card::Values).default(Expr::cust("'{}'::json")))
                    .col(integer(Card::Position).default(0))
                    .col(
                        timestamp_with_time_zone(Card::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Card::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cards-dashboard_id")
                            .from(Card::Table, Card::DashboardId)
                            .to(Dashboard::Table, Dashboard::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Card::Table)
                    .col(Card::DashboardId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().if_exists().name(CardTypeEnum).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    DashboardId,
    CardType,
    Title,
    Values,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Dashboard {
    Table,
    Id,
}

#[derive(DeriveIden)]
struct CardTypeEnum;

#[derive(DeriveIden, EnumIter)]
enum CardTypeVariants {
    #[sea_orm(iden = "price_ticker")]
    PriceTicker,
    #[sea_orm(iden = "balance")]
    Balance,
    #[sea_orm(iden = "calculator")]
    Calculator,
    #[sea_orm(iden = "gas_tracker")]
    GasTracker,
    #[sea_orm(iden = "uniswap_position")]
    UniswapPosition,
    #[sea_orm(iden = "order_book")]
    OrderBook,
}
