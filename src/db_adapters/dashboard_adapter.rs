use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    Order, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use entities::{
    dashboard::{ActiveModel, Column, Entity, Model},
    user,
};

use crate::ordering::position_case;

#[derive(Clone)]
pub struct DashboardAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> DashboardAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait DashboardFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
    fn filter_visible_to(self, user: &user::Model) -> Self;
}

impl DashboardFilter for DashboardAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }

    fn filter_visible_to(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(
            Condition::any()
                .add(Column::UserId.eq(user.id))
                .add(Column::IsPublic.eq(true)),
        );
        self
    }
}

pub trait DashboardOrder {
    fn order_by_position(self, order: Order) -> Self;
    fn order_by_updated_at(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl DashboardOrder for DashboardAdapter<'_> {
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

pub trait DashboardQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_max_position(self) -> impl Future<Output = Result<Option<i32>, DbErr>>;
}

impl DashboardQuery for DashboardAdapter<'_> {
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
pub struct CreateDashboardParams {
    pub title: String,
    pub is_public: bool,
    pub position: i32,
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateDashboardParams {
    pub title: String,
    pub is_public: bool,
}

pub trait DashboardMutation {
    fn create(
        self,
        params: CreateDashboardParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(
        self,
        dashboard: Model,
        params: UpdateDashboardParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn reorder(
        self,
        user: &user::Model,
        positions: Vec<(Uuid, i32)>,
    ) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn delete(self, dashboard: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl DashboardMutation for DashboardAdapter<'_> {
    async fn create(self, params: CreateDashboardParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            user_id: Set(params.user_id),
            title: Set(params.title),
            is_public: Set(params.is_public),
            position: Set(params.position),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(self, dashboard: Model, params: UpdateDashboardParams) -> Result<Model, DbErr> {
        let mut dashboard = dashboard.into_active_model();
        dashboard.title = Set(params.title);
        dashboard.is_public = Set(params.is_public);
        dashboard.updated_at = Set(Utc::now().into());
        dashboard.update(self.db).await
    }

    /// Rows not owned by `user` are left out of the statement, so the returned
    /// models are exactly the ones whose position was written.
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
            .filter(Column::UserId.eq(user.id))
            .exec_with_returning(self.db)
            .await
    }

    async fn delete(self, dashboard: Model) -> Result<(), DbErr> {
        dashboard.delete(self.db).await.map(|_| ())
    }
}
