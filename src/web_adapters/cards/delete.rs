use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::card_adapter::CardAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::cards::delete::delete_card;

use crate::utils::{response_401, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    card_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a card", skip(db, user))]
#[delete("/{card_id}")]
pub async fn delete_card_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match delete_card(user.into_inner(), path_param.card_id, CardAdapter::init(&db)).await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
