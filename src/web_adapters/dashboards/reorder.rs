use actix_web::{
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::dashboard_adapter::DashboardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    dashboards::{reorder::reorder_dashboards, types::DashboardReorderRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_500};

#[tracing::instrument(name = "Reordering a user's dashboards", skip(db, user))]
#[put("/reorder")]
pub async fn reorder_dashboards_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<DashboardReorderRequest>,
) -> HttpResponse {
    match reorder_dashboards(
        user.map(|user| user.into_inner()),
        req.into_inner(),
        DashboardAdapter::init(&db),
    )
    .await
    {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
