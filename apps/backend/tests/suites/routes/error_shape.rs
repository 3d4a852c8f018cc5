use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;

use crate::support::{build_test_state_without_db, create_test_app};

async fn conflict() -> Result<HttpResponse, AppError> {
    Err(AppError::conflict(ErrorCode::DuplicateName, "name taken"))
}

async fn ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[actix_web::test]
async fn problem_details_carry_request_trace_id() {
    let state = build_test_state_without_db().await.unwrap();
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_conflict", web::get().to(conflict));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_conflict").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details_from_service_response(
        resp,
        "DUPLICATE_NAME",
        StatusCode::CONFLICT,
        Some("name taken"),
    )
    .await;
    assert_eq!(problem.title, "Duplicate Name");
    // A real request id, not the out-of-scope placeholder
    assert_ne!(problem.trace_id, "unknown");
}

#[actix_web::test]
async fn success_responses_carry_trace_header() {
    let state = build_test_state_without_db().await.unwrap();
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_ok", web::get().to(ok));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_ok").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let trace = resp.headers().get("x-trace-id").unwrap().to_str().unwrap();
    assert_eq!(trace.len(), 36);
}
