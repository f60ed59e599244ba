use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::dashboard_adapter::DashboardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::dashboards::delete::delete_dashboard;

use crate::utils::{response_401, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    dashboard_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a dashboard", skip(db, user))]
#[delete("/{dashboard_id}")]
pub async fn delete_dashboard_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match delete_dashboard(
                user.into_inner(),
                path_param.dashboard_id,
                DashboardAdapter::init(&db),
            )
            .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
