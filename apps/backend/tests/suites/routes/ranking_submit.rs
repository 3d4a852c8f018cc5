use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::unique_player_name;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::{build_test_state, build_test_state_without_db, create_test_app};

async fn post_ranking<S>(app: &S, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/ranking")
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

async fn get_ranking<S>(app: &S) -> Vec<Value>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get().uri("/ranking").to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    body.as_array().cloned().expect("ranking is a JSON array")
}

#[actix_web::test]
async fn first_submission_is_inserted_with_201() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(&app, json!({"name": "Ana", "stars": 2, "level": "Médio"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = read_json(resp).await;
    assert_eq!(body["outcome"], "inserted");
    assert_eq!(body["message"], "Novo jogador inserido no ranking!");
    assert_eq!(body["entry"], json!({"name": "Ana", "stars": 2, "level": "Médio"}));
    assert!(body.get("previous_stars").is_none());
}

#[actix_web::test]
async fn worse_result_keeps_stored_best() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    post_ranking(&app, json!({"name": "Ana", "stars": 2, "level": "Médio"})).await;
    let resp = post_ranking(&app, json!({"name": "Ana", "stars": 1, "level": "Fácil"})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["outcome"], "unchanged");
    assert_eq!(body["entry"]["stars"], 2);

    let ranking = get_ranking(&app).await;
    assert_eq!(ranking, vec![json!({"name": "Ana", "stars": 2, "level": "Médio"})]);
}

#[actix_web::test]
async fn equal_stars_is_a_no_op() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    post_ranking(&app, json!({"name": "Bia", "stars": 3, "level": "Difícil"})).await;
    let resp = post_ranking(&app, json!({"name": "Bia", "stars": 3, "level": "Médio"})).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["outcome"], "unchanged");
    assert_eq!(body["entry"]["level"], "Difícil");
}

#[actix_web::test]
async fn better_result_updates_stars_and_level() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    post_ranking(&app, json!({"name": "Ana", "stars": 2, "level": "Médio"})).await;
    let resp = post_ranking(&app, json!({"name": "Ana", "stars": 3, "level": "Difícil"})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["outcome"], "updated");
    assert_eq!(body["message"], "Recorde atualizado com sucesso!");
    assert_eq!(body["previous_stars"], 2);

    let ranking = get_ranking(&app).await;
    assert_eq!(ranking, vec![json!({"name": "Ana", "stars": 3, "level": "Difícil"})]);
}

#[actix_web::test]
async fn portuguese_field_names_are_accepted() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(
        &app,
        json!({"nome": "Caio", "estrelas": 1, "nivel": "Fácil"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["entry"]["name"], "Caio");
}

#[actix_web::test]
async fn names_are_trimmed_and_normalized_into_one_entry() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    // Decomposed "José" first, then padded precomposed "José"
    post_ranking(&app, json!({"name": "Jose\u{301}", "stars": 1, "level": "Fácil"})).await;
    let resp = post_ranking(
        &app,
        json!({"name": "  Jos\u{e9} ", "stars": 2, "level": "Médio"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["outcome"], "updated");

    let ranking = get_ranking(&app).await;
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0]["name"], "Jos\u{e9}");
}

#[actix_web::test]
async fn missing_name_is_rejected_without_writing() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(&app, json!({"stars": 2, "level": "Médio"})).await;
    assert_problem_details_from_service_response(
        resp,
        "MISSING_FIELD",
        StatusCode::BAD_REQUEST,
        Some("Dados incompletos"),
    )
    .await;

    assert!(get_ranking(&app).await.is_empty());
}

#[actix_web::test]
async fn blank_level_is_rejected() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(&app, json!({"name": "Ana", "stars": 2, "level": "  "})).await;
    assert_problem_details_from_service_response(
        resp,
        "MISSING_FIELD",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn stars_out_of_range_are_rejected() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    for stars in [0, 4] {
        let resp = post_ranking(
            &app,
            json!({"name": unique_player_name("Ana"), "stars": stars, "level": "Médio"}),
        )
        .await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_STARS",
            StatusCode::BAD_REQUEST,
            Some("between 1 and 3"),
        )
        .await;
    }

    assert!(get_ranking(&app).await.is_empty());
}

#[actix_web::test]
async fn overlong_name_is_rejected() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(
        &app,
        json!({"name": "x".repeat(65), "stars": 2, "level": "Médio"}),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_NAME",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/ranking")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Ana", "stars": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn wrong_field_type_is_bad_request() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(
        &app,
        json!({"name": "Ana", "stars": "três", "level": "Médio"}),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("wrong types"),
    )
    .await;
}

#[actix_web::test]
async fn storage_failure_is_500() {
    let state = build_test_state_without_db().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(&app, json!({"name": "Ana", "stars": 2, "level": "Médio"})).await;
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;
}

#[actix_web::test]
async fn validation_runs_before_storage() {
    // No database, but the body is invalid: the client still gets a 400
    let state = build_test_state_without_db().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = post_ranking(&app, json!({"name": "Ana", "stars": 9, "level": "Médio"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
