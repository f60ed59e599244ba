use actix_web::{http, test, HttpMessage};
use entities::card;
use reorder::{OrderObject, ReorderRequest};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use super::super::utils::init_app;
use common::factory::{self, *};

fn request(positions: &[(uuid::Uuid, i32)]) -> ReorderRequest<uuid::Uuid> {
    ReorderRequest {
        order_objects: positions
            .iter()
            .map(|(id, position)| OrderObject {
                id: *id,
                position: *position,
            })
            .collect(),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let a = factory::card(dashboard.id).position(0).insert(&db).await?;
    let b = factory::card(dashboard.id).position(1).insert(&db).await?;
    let c = factory::card(dashboard.id).position(2).insert(&db).await?;
    let d = factory::card(dashboard.id).position(3).insert(&db).await?;

    // [A, B, C, D] with D dropped onto B.
    let req = test::TestRequest::put()
        .uri("/api/cards/reorder")
        .set_json(request(&[(d.id, 1), (b.id, 2), (c.id, 3)]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
    assert_eq!(res.len(), 3);

    let a_in_db = card::Entity::find_by_id(a.id).one(&db).await?.unwrap();
    assert_eq!(a_in_db, a);
    for (id, position) in [(d.id, 1), (b.id, 2), (c.id, 3)] {
        let card_in_db = card::Entity::find_by_id(id).one(&db).await?.unwrap();
        assert_eq!(card_in_db.position, position);
    }

    Ok(())
}

#[actix_web::test]
async fn cards_on_dashboards_of_another_user_are_not_touched() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let another_user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let others_dashboard = factory::dashboard(another_user.id)
        .is_public(true)
        .insert(&db)
        .await?;
    let own = factory::card(dashboard.id).position(0).insert(&db).await?;
    let others = factory::card(others_dashboard.id)
        .position(4)
        .insert(&db)
        .await?;

    let req = test::TestRequest::put()
        .uri("/api/cards/reorder")
        .set_json(request(&[(others.id, 0), (own.id, 1)]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
    assert_eq!(res, vec![OrderObject { id: own.id, position: 1 }]);

    let others_in_db = card::Entity::find_by_id(others.id).one(&db).await?.unwrap();
    assert_eq!(others_in_db, others);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_empty() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/cards/reorder")
        .set_json(request(&[]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn repeating_a_batch_gives_the_same_positions() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let c1 = factory::card(dashboard.id).position(0).insert(&db).await?;
    let c2 = factory::card(dashboard.id).position(1).insert(&db).await?;

    for _ in 0..2 {
        let req = test::TestRequest::put()
            .uri("/api/cards/reorder")
            .set_json(request(&[(c2.id, 0), (c1.id, 1)]))
            .to_request();
        req.extensions_mut().insert(user.clone());

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);

        let mut res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
        res.sort_by_key(|o| o.position);
        assert_eq!(
            res,
            vec![
                OrderObject { id: c2.id, position: 0 },
                OrderObject { id: c1.id, position: 1 },
            ]
        );
    }

    let c1_in_db = card::Entity::find_by_id(c1.id).one(&db).await?.unwrap();
    let c2_in_db = card::Entity::find_by_id(c2.id).one(&db).await?.unwrap();
    assert_eq!(c1_in_db.position, 1);
    assert_eq!(c2_in_db.position, 0);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_duplicate_ids() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let card = factory::card(dashboard.id).position(0).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/cards/reorder")
        .set_json(request(&[(card.id, 0), (card.id, 1)]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let card_in_db = card::Entity::find_by_id(card.id).one(&db).await?.unwrap();
    assert_eq!(card_in_db, card);

    Ok(())
}

#[actix_web::test]
async fn writes_nothing_if_not_logged_in() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).insert(&db).await?;
    let row = factory::card(dashboard.id).position(2).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/cards/reorder")
        .set_json(request(&[(row.id, 0)]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
    assert!(res.is_empty());

    let row_in_db = card::Entity::find_by_id(row.id).one(&db).await?.unwrap();
    assert_eq!(row_in_db, row);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_empty_and_not_logged_in() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::put()
        .uri("/api/cards/reorder")
        .set_json(request(&[]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
