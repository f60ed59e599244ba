use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::dashboard_adapter::DashboardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    dashboards::{create::create_dashboard, types::DashboardCreateRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_500};

#[tracing::instrument(name = "Creating a dashboard", skip(db, user))]
#[post("")]
pub async fn create_dashboard_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<DashboardCreateRequest>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match create_dashboard(
                user.into_inner(),
                req.into_inner(),
                DashboardAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Created().json(res),
                Err(e) => match &e {
                    UseCaseError::BadRequest(message) => response_400(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
