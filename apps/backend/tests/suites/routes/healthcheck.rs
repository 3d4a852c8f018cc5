use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::read_json;
use crate::support::{build_test_state, build_test_state_without_db, create_test_app};

#[actix_web::test]
async fn health_reports_db_and_migration() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251018_000001_create_ranking");
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn health_without_db_still_answers_200() {
    let state = build_test_state_without_db().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
}
