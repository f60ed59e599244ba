use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::card_adapter::CardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    cards::{types::CardUpdateRequest, update::update_card},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    card_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a card", skip(db, user))]
#[put("/{card_id}")]
pub async fn update_card_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<CardUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match update_card(
                user.into_inner(),
                req.into_inner(),
                path_param.card_id,
                CardAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Ok().json(res),
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
