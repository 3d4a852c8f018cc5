use actix_web::http::StatusCode;
use actix_web::test;
use backend::db::txn::with_txn;
use backend::domain::submission::Submission;
use backend::services::ranking::RankingService;
use backend::state::app_state::AppState;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;

use crate::common::read_json;
use crate::support::{build_test_state, build_test_state_without_db, create_test_app};

async fn seed(state: &AppState, name: &str, stars: i64, level: &str) {
    let valid = Submission {
        name: Some(name.to_string()),
        stars: Some(stars),
        level: Some(level.to_string()),
    }
    .validate()
    .unwrap();

    with_txn(state, move |txn| {
        Box::pin(async move { Ok(RankingService::new().submit(txn, valid).await?) })
    })
    .await
    .unwrap();
}

#[actix_web::test]
async fn empty_ranking_is_empty_array() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/ranking").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));
}

#[actix_web::test]
async fn returns_top_ten_best_first() {
    let state = build_test_state().await.unwrap();

    // P00..P10; stars cycle 1,2,3
    for i in 0..11 {
        seed(&state, &format!("P{i:02}"), (i % 3) + 1, "Médio").await;
    }

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::get().uri("/ranking").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 10);

    let stars: Vec<i64> = rows.iter().map(|r| r["stars"].as_i64().unwrap()).collect();
    assert!(stars.windows(2).all(|w| w[0] >= w[1]), "stars not descending: {stars:?}");
    assert_eq!(&stars[..3], &[3, 3, 3]);

    // Ties keep submission order, so the latest one-star player is cut
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(&names[..3], &["P02", "P05", "P08"]);
    assert!(!names.contains(&"P09"));

    // Only the public fields are exposed
    let mut keys: Vec<&str> = rows[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["level", "name", "stars"]);
}

#[actix_web::test]
async fn storage_failure_is_500() {
    let state = build_test_state_without_db().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/ranking").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::INTERNAL_SERVER_ERROR,
        Some("Database unavailable"),
    )
    .await;
}
