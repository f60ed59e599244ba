use actix_web::{
    post,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::{card_adapter::CardAdapter, dashboard_adapter::DashboardAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    cards::{create::create_card, types::CardCreateRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    dashboard_id: uuid::Uuid,
}

#[tracing::instrument(name = "Creating a card", skip(db, user))]
#[post("")]
pub async fn create_card_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<CardCreateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match create_card(
                user.into_inner(),
                path_param.dashboard_id,
                req.into_inner(),
                DashboardAdapter::init(&db),
                CardAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Created().json(res),
                Err(e) => match &e {
                    UseCaseError::BadRequest(message) => response_400(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
