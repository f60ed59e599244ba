use actix_web::{http, test, HttpMessage};
use entities::{card, sea_orm_active_enums::CardTypeEnum};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use super::super::utils::init_app;
use common::factory::{self, *};
use use_cases::cards::types::{CardCreateRequest, CardVisible};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    factory::card(dashboard.id).position(0).insert(&db).await?;

    let values = serde_json::json!({ "symbol": "ETH" });
    let req = test::TestRequest::post()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .set_json(CardCreateRequest {
            card_type: CardTypeEnum::Balance,
            title: "ETH balance".to_string(),
            values: Some(values.clone()),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: CardVisible = test::read_body_json(resp).await;
    assert_eq!(res.dashboard_id, dashboard.id);
    assert_eq!(res.card_type, CardTypeEnum::Balance);
    assert_eq!(res.title, "ETH balance".to_string());
    assert_eq!(res.values, values);
    assert_eq!(res.position, 1);

    let card_in_db = card::Entity::find_by_id(res.id).one(&db).await?.unwrap();
    assert_eq!(CardVisible::from(card_in_db), res);

    Ok(())
}

#[actix_web::test]
async fn goes_last_after_a_sibling_was_deleted() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let first = factory::card(dashboard.id).position(0).insert(&db).await?;
    factory::card(dashboard.id).position(1).insert(&db).await?;
    factory::card(dashboard.id).position(2).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{}", first.id))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

    let req = test::TestRequest::post()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .set_json(CardCreateRequest {
            card_type: CardTypeEnum::Calculator,
            title: "New".to_string(),
            values: None,
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);
    let created: CardVisible = test::read_body_json(resp).await;
    assert_eq!(created.position, 3);

    let req = test::TestRequest::get()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<CardVisible> = test::read_body_json(resp).await;
    assert_eq!(res.len(), 3);
    assert_eq!(res.last().map(|c| c.id), Some(created.id));

    Ok(())
}

#[actix_web::test]
async fn values_default_to_empty_object() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .set_json(CardCreateRequest {
            card_type: CardTypeEnum::GasTracker,
            title: "Gas".to_string(),
            values: None,
        })
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: CardVisible = test::read_body_json(resp).await;
    assert_eq!(res.values, serde_json::json!({}));
    assert_eq!(res.position, 0);

    Ok(())
}

#[actix_web::test]
async fn not_found_if_dashboard_of_another_user() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let another_user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(another_user.id)
        .is_public(true)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .set_json(CardCreateRequest {
            card_type: CardTypeEnum::PriceTicker,
            title: "BTC".to_string(),
            values: None,
        })
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_title_is_empty() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .set_json(CardCreateRequest {
            card_type: CardTypeEnum::PriceTicker,
            title: "".to_string(),
            values: None,
        })
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/dashboards/{}/cards", dashboard.id))
        .set_json(CardCreateRequest {
            card_type: CardTypeEnum::PriceTicker,
            title: "BTC".to_string(),
            values: None,
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
