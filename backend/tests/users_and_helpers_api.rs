//! End-to-end behaviour of the user, helper, and health routes.

#[path = "common/app.rs"]
mod app_support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use app_support::{init_app, init_app_with_health, send};
use rstest::rstest;
use serde_json::{Value, json};

fn post_json(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

#[actix_web::test]
async fn invalid_email_is_rejected_naming_the_field() {
    let app = init_app().await;

    let rejected = send(
        &app,
        post_json("/api/users", json!({"name": "A", "email": "not-an-email"})),
    )
    .await;

    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    let message = rejected.body["message"].as_str().expect("message");
    assert!(message.contains("email"), "message was {message}");
    assert_eq!(rejected.body["details"]["field"], "email");
}

#[actix_web::test]
async fn created_user_is_served_back() {
    let app = init_app().await;

    let created = send(
        &app,
        post_json(
            "/api/users",
            json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
        ),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);

    let id = created.body["id"].as_u64().expect("numeric id");
    let fetched = send(&app, TestRequest::get().uri(&format!("/api/users/{id}"))).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[actix_web::test]
async fn duplicate_email_conflicts() {
    let app = init_app().await;
    let body = json!({"name": "Ada", "email": "ada@example.com"});

    let first = send(&app, post_json("/api/users", body.clone())).await;
    let second = send(&app, post_json("/api/users", body)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["code"], "conflict");
}

#[actix_web::test]
async fn user_receipts_are_filtered_by_owner() {
    let app = init_app().await;
    let ada = send(
        &app,
        post_json("/api/users", json!({"name": "Ada", "email": "ada@example.com"})),
    )
    .await;
    let ada_id = ada.body["id"].as_u64().expect("numeric id");

    for user_id in [json!(ada_id), Value::Null, json!(ada_id)] {
        let created = send(
            &app,
            post_json(
                "/api/receipts",
                json!({
                    "userId": user_id,
                    "storeName": "Bakery",
                    "date": "2024-05-01T10:00:00Z",
                    "total": 3.0,
                }),
            ),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED);
    }

    let owned = send(
        &app,
        TestRequest::get().uri(&format!("/api/users/{ada_id}/receipts")),
    )
    .await;
    let owned = owned.body.as_array().expect("array").clone();
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|receipt| receipt["userId"] == ada_id));
}

#[actix_web::test]
async fn product_label_is_derived_from_the_url() {
    let app = init_app().await;

    let label = send(
        &app,
        post_json(
            "/api/scrape-product",
            json!({"url": "https://example.com/store/cool-blue-widget"}),
        ),
    )
    .await;

    assert_eq!(label.status, StatusCode::OK);
    assert_eq!(label.body, json!({"name": "Cool Blue Widget", "price": "0.00"}));
}

#[actix_web::test]
async fn pdf_endpoint_only_acknowledges() {
    let app = init_app().await;

    let response = send(&app, TestRequest::post().uri("/api/generate-pdf")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].is_string());
}

#[rstest]
#[case(true, StatusCode::OK, "ok")]
#[case(false, StatusCode::SERVICE_UNAVAILABLE, "starting")]
#[actix_web::test]
async fn health_reports_readiness(
    #[case] ready: bool,
    #[case] expected: StatusCode,
    #[case] status: &str,
) {
    let app = init_app_with_health(ready).await;

    let response = send(&app, TestRequest::get().uri("/api/health")).await;

    assert_eq!(response.status, expected);
    assert_eq!(response.body["status"], status);
}

#[actix_web::test]
async fn openapi_document_is_served_in_debug_builds() {
    let app = init_app().await;

    let response = send(&app, TestRequest::get().uri("/api-docs/openapi.json")).await;

    if cfg!(debug_assertions) {
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body["paths"]["/api/receipts"].is_object());
    } else {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
