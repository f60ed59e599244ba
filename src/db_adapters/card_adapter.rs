use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Query, SimpleExpr},
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    Order, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use entities::{
    card::{ActiveModel, Column, Entity, Model},
    dashboard,
    sea_orm_active_enums::CardTypeEnum,
    user,
};

use crate::ordering::position_case;

/// `EXISTS (SELECT 1 FROM dashboard WHERE dashboard.id = card.dashboard_id AND dashboard.user_id = ..)`
fn owned_by(user_id: Uuid) -> SimpleExpr {
    Expr::exists(
        Query::select()
            .expr(Expr::value(1))
            .from(dashboard::Entity)
            .and_where(
                Expr::col((dashboard::Entity, dashboard::Column::Id))
                    .equals((Entity, Column::DashboardId)),
            )
            .and_where(Expr::col((dashboard::Entity, dashboard::Column::UserId)).eq(user_id))
            .to_owned(),
    )
}

#[derive(Clone)]
pub struct CardAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> CardAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait CardFilter {
    fn filter_eq_dashboard(self, dashboard: &dashboard::Model) -> Self;
    fn filter_owned_by(self, user: &user::Model) -> Self;
}

impl CardFilter for CardAdapter<'_> {
    fn filter_eq_dashboard(mut self, dashboard: &dashboard::Model) -> Self {
        self.query = self.query.filter(Column::DashboardId.eq(dashboard.id));
        self
    }

    fn filter_owned_by(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(owned_by(user.id));
        self
    }
}

pub trait CardOrder {
    fn order_by_position(self, order: Order) -> Self;
    fn order_by_updated_at(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl CardOrder for CardAdapter<'_> {
    fn order_by_position(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Position, order);
        self
    }

    fn order_by_updated_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::UpdatedAt, order);
        self
    }

    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait CardQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_max_position(self) -> impl Future<Output = Result<Option<i32>, DbErr>>;
}

impl CardQuery for CardAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    /// `None` when the query matches no rows.
    async fn get_max_position(self) -> Result<Option<i32>, DbErr> {
        self.query
            .select_only()
            .column_as(Column::Position.max(), "max_position")
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await
            .map(|res| res.flatten())
    }
}

#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub dashboard_id: Uuid,
    pub card_type: CardTypeEnum,
    pub title: String,
    pub values: serde_json::Value,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCardParams {
    pub title: String,
    pub values: serde_json::Value,
}

pub trait CardMutation {
    fn create(self, params: CreateCardParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(
        self,
        card: Model,
        params: UpdateCardParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn reorder(
        self,
        user: &user::Model,
        positions: Vec<(Uuid, i32)>,
    ) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn delete(self, card: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl CardMutation for CardAdapter<'_> {
    async fn create(self, params: CreateCardParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            dashboard_id: Set(params.dashboard_id),
            card_type: Set(params.card_type),
            title: Set(params.title),
            values: Set(params.values),
            position: Set(params.position),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(self, card: Model, params: UpdateCardParams) -> Result<Model, DbErr> {
        let mut card = card.into_active_model();
        card.title = Set(params.title);
        card.values = Set(params.values);
        card.updated_at = Set(Utc::now().into());
        card.update(self.db).await
    }

    /// Same contract as the dashboard reorder, with ownership resolved through
    /// the card's dashboard.
    async fn reorder(
        self,
        user: &user::Model,
        positions: Vec<(Uuid, i32)>,
    ) -> Result<Vec<Model>, DbErr> {
        if positions.is_empty() {
            return Ok(vec![]);
        }
        let ids = positions.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        Entity::update_many()
            .col_expr(
                Column::Position,
                position_case(Column::Id, Column::Position, &positions),
            )
            .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(Column::Id.is_in(ids))
            .filter(owned_by(user.id))
            .exec_with_returning(self.db)
            .await
    }

    async fn delete(self, card: Model) -> Result<(), DbErr> {
        card.delete(self.db).await.map(|_| ())
    }
}
