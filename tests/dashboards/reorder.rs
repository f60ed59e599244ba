use actix_web::{http, test, HttpMessage};
use entities::dashboard;
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
    let d1 = factory::dashboard(user.id).position(0).insert(&db).await?;
    let d2 = factory::dashboard(user.id).position(1).insert(&db).await?;
    let d3 = factory::dashboard(user.id).position(2).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/dashboards/reorder")
        .set_json(request(&[(d3.id, 0), (d1.id, 1), (d2.id, 2)]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let mut res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
    res.sort_by_key(|o| o.position);
    assert_eq!(
        res,
        vec![
            OrderObject { id: d3.id, position: 0 },
            OrderObject { id: d1.id, position: 1 },
            OrderObject { id: d2.id, position: 2 },
        ]
    );

    for (id, position) in [(d3.id, 0), (d1.id, 1), (d2.id, 2)] {
        let dashboard_in_db = dashboard::Entity::find_by_id(id).one(&db).await?.unwrap();
        assert_eq!(dashboard_in_db.position, position);
    }

    Ok(())
}

#[actix_web::test]
async fn dashboards_of_another_user_are_not_touched() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let another_user = factory::user().insert(&db).await?;
    let own = factory::dashboard(user.id).position(0).insert(&db).await?;
    let others = factory::dashboard(another_user.id)
        .position(7)
        .insert(&db)
        .await?;

    let req = test::TestRequest::put()
        .uri("/api/dashboards/reorder")
        .set_json(request(&[(others.id, 0), (own.id, 1)]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
    assert_eq!(res, vec![OrderObject { id: own.id, position: 1 }]);

    let others_in_db = dashboard::Entity::find_by_id(others.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(others_in_db.position, 7);
    assert_eq!(others_in_db.updated_at, others.updated_at);

    Ok(())
}

#[actix_web::test]
async fn repeating_a_batch_gives_the_same_positions() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let d1 = factory::dashboard(user.id).position(0).insert(&db).await?;
    let d2 = factory::dashboard(user.id).position(1).insert(&db).await?;

    for _ in 0..2 {
        let req = test::TestRequest::put()
            .uri("/api/dashboards/reorder")
            .set_json(request(&[(d2.id, 0), (d1.id, 1)]))
            .to_request();
        req.extensions_mut().insert(user.clone());

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
    }

    let d1_in_db = dashboard::Entity::find_by_id(d1.id).one(&db).await?.unwrap();
    let d2_in_db = dashboard::Entity::find_by_id(d2.id).one(&db).await?.unwrap();
    assert_eq!(d1_in_db.position, 1);
    assert_eq!(d2_in_db.position, 0);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_empty() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/dashboards/reorder")
        .set_json(request(&[]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_duplicate_ids() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let dashboard = factory::dashboard(user.id).position(0).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/dashboards/reorder")
        .set_json(request(&[(dashboard.id, 0), (dashboard.id, 1)]))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let dashboard_in_db = dashboard::Entity::find_by_id(dashboard.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(dashboard_in_db.position, 0);

    Ok(())
}

#[actix_web::test]
async fn writes_nothing_if_not_logged_in() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let row = factory::dashboard(user.id).position(2).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/dashboards/reorder")
        .set_json(request(&[(row.id, 0)]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: Vec<OrderObject<uuid::Uuid>> = test::read_body_json(resp).await;
    assert!(res.is_empty());

    let row_in_db = dashboard::Entity::find_by_id(row.id).one(&db).await?.unwrap();
    assert_eq!(row_in_db, row);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_empty_and_not_logged_in() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::put()
        .uri("/api/dashboards/reorder")
        .set_json(request(&[]))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
