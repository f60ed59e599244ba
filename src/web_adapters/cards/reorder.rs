use actix_web::{
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::card_adapter::CardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    cards::{reorder::reorder_cards, types::CardReorderRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_500};

#[tracing::instrument(name = "Reordering cards", skip(db, user))]
#[put("/reorder")]
pub async fn reorder_cards_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<CardReorderRequest>,
) -> HttpResponse {
    match reorder_cards(
        user.map(|user| user.into_inner()),
        req.into_inner(),
        CardAdapter::init(&db),
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
