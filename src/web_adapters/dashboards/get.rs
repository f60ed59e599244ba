use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::dashboard_adapter::DashboardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{dashboards::get::get_dashboard, UseCaseError};

use crate::utils::{response_401, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    dashboard_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a dashboard", skip(db, user))]
#[get("/{dashboard_id}")]
pub async fn get_dashboard_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match get_dashboard(
                user.into_inner(),
                path_param.dashboard_id,
                DashboardAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Ok().json(res),
                Err(e) => match &e {
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
