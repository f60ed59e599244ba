use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::dashboard_adapter::DashboardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::dashboards::list::list_dashboards;

use crate::utils::{response_401, response_500};

#[tracing::instrument(name = "Listing a user's dashboards", skip(db, user))]
#[get("")]
pub async fn list_dashboards_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => match list_dashboards(user.into_inner(), DashboardAdapter::init(&db)).await {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => response_500(e),
        },
        None => response_401(),
    }
}
