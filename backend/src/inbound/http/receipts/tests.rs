//! Tests for receipts API handlers.

use super::*;
use crate::domain::ports::{
    MockReceiptItemRepository, MockReceiptRepository, MockUserRepository,
    ReceiptRepositoryError,
};
use crate::inbound::http::test_utils::{memory_state, mock_state, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

fn corner_shop() -> Value {
    json!({
        "storeName": "Corner Shop",
        "date": "2024-05-01T12:00:00+02:00",
        "total": 12.5,
    })
}

#[actix_web::test]
async fn created_receipt_can_be_fetched() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let create = actix_test::TestRequest::post()
        .uri("/api/receipts")
        .set_json(corner_shop())
        .to_request();
    let response = actix_test::call_service(&app, create).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ReceiptResponse = actix_test::read_body_json(response).await;

    let fetch = actix_test::TestRequest::get()
        .uri(&format!("/api/receipts/{}", created.id))
        .to_request();
    let fetched: ReceiptResponse = actix_test::call_and_read_body_json(&app, fetch).await;

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.store_name, "Corner Shop");
    assert_eq!(fetched.total, 12.5);
    assert_eq!(fetched.user_id, None);
    assert_eq!(fetched.date.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[actix_web::test]
async fn receipts_are_listed_in_insertion_order() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    for store in ["First", "Second", "Third"] {
        let mut body = corner_shop();
        body["storeName"] = json!(store);
        let request = actix_test::TestRequest::post()
            .uri("/api/receipts")
            .set_json(body)
            .to_request();
        actix_test::call_service(&app, request).await;
    }

    let list = actix_test::TestRequest::get().uri("/api/receipts").to_request();
    let receipts: Vec<ReceiptResponse> = actix_test::call_and_read_body_json(&app, list).await;
    let names: Vec<&str> = receipts
        .iter()
        .map(|receipt| receipt.store_name.as_str())
        .collect();
    assert_eq!(names, ["First", "Second", "Third"]);
    assert!(receipts.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[rstest]
#[case("/api/receipts/42", StatusCode::NOT_FOUND)]
#[case("/api/receipts/forty-two", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn unknown_or_malformed_ids_are_rejected(#[case] uri: &str, #[case] status: StatusCode) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), status);
}

#[rstest]
#[case("storeName", json!(null), "missing_field")]
#[case("storeName", json!(""), "empty_value")]
#[case("date", json!("last tuesday"), "invalid_timestamp")]
#[case("total", json!(null), "missing_field")]
#[actix_web::test]
async fn invalid_receipts_name_the_field(
    #[case] field: &str,
    #[case] value: Value,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let mut body = corner_shop();
    body[field] = value;
    let request = actix_test::TestRequest::post()
        .uri("/api/receipts")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["details"]["field"], field);
    assert_eq!(payload["details"]["code"], code);
}

#[actix_web::test]
async fn receipt_for_unknown_user_is_a_bad_request() {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let mut body = corner_shop();
    body["userId"] = json!(7);
    let request = actix_test::TestRequest::post()
        .uri("/api/receipts")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["details"]["field"], "userId");
    assert_eq!(payload["details"]["code"], "unknown_user");
}

#[actix_web::test]
async fn listing_failure_is_redacted() {
    let mut receipts = MockReceiptRepository::new();
    receipts
        .expect_list_all()
        .times(1)
        .returning(|| Err(ReceiptRepositoryError::unavailable("store lock poisoned")));
    let state = mock_state(
        MockUserRepository::new(),
        receipts,
        MockReceiptItemRepository::new(),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get().uri("/api/receipts").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["message"], "Internal server error");
}
