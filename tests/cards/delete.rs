use actix_web::{http, test, HttpMessage};
use entities::card;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use super::super::utils::init_app;
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let card = factory::card(dashboard.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{}", card.id))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    let card_in_db = card::Entity::find_by_id(card.id).one(&db).await?;
    assert!(card_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn card_of_another_user_is_kept() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let another_user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(another_user.id).insert(&db).await?;
    let card = factory::card(dashboard.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{}", card.id))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    let card_in_db = card::Entity::find_by_id(card.id).one(&db).await?;
    assert!(card_in_db.is_some());

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{}", uuid::Uuid::now_v7()))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
