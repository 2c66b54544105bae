//! End-to-end behaviour of the receipt and receipt item routes.

#[path = "common/app.rs"]
mod app_support;

use actix_web::http::{Method, StatusCode};
use actix_web::test::TestRequest;
use app_support::{Captured, init_app, send};
use chrono::{DateTime, Utc};
use rstest::rstest;
use serde_json::{Value, json};

fn receipt_payload() -> Value {
    json!({
        "storeName": "Corner Shop",
        "date": "2024-05-01T10:00:00Z",
        "total": 12.5,
    })
}

fn post_json(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

fn instant(value: &Value) -> DateTime<Utc> {
    let raw = value.as_str().expect("timestamp string");
    DateTime::parse_from_rfc3339(raw)
        .expect("RFC 3339 timestamp")
        .with_timezone(&Utc)
}

fn id_of(captured: &Captured) -> u64 {
    captured.body["id"].as_u64().expect("numeric id")
}

#[actix_web::test]
async fn created_receipt_is_returned_with_server_fields() {
    let app = init_app().await;

    let created = send(&app, post_json("/api/receipts", receipt_payload())).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let fetched = send(&app, get(&format!("/api/receipts/{}", id_of(&created)))).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
    for (field, expected) in receipt_payload().as_object().expect("object") {
        if field == "date" {
            assert_eq!(instant(&fetched.body[field]), instant(expected));
        } else {
            assert_eq!(&fetched.body[field], expected, "field {field}");
        }
    }
    assert_eq!(fetched.body["userId"], Value::Null);
    assert!(fetched.body["createdAt"].is_string());
    assert_eq!(fetched.body["createdAt"], fetched.body["updatedAt"]);
}

#[actix_web::test]
async fn offset_dates_are_stored_as_the_same_instant_in_utc() {
    let app = init_app().await;
    let mut payload = receipt_payload();
    payload["date"] = json!("2024-05-01T12:00:00+02:00");

    let created = send(&app, post_json("/api/receipts", payload.clone())).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let fetched = send(&app, get(&format!("/api/receipts/{}", id_of(&created)))).await;
    assert_eq!(instant(&fetched.body["date"]), instant(&payload["date"]));
    let served = fetched.body["date"].as_str().expect("date string");
    assert!(served.ends_with('Z'), "date was {served}");
    assert_eq!(
        instant(&fetched.body["date"]),
        instant(&json!("2024-05-01T10:00:00Z"))
    );
}

#[actix_web::test]
async fn absent_receipt_is_not_found_with_matching_trace_id() {
    let app = init_app().await;

    let missing = send(&app, get("/api/receipts/404")).await;

    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["code"], "not_found");
    let header = missing.header("trace-id").expect("trace-id header");
    assert_eq!(missing.body["traceId"], header);
}

#[actix_web::test]
async fn identifiers_increase_monotonically() {
    let app = init_app().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let created = send(&app, post_json("/api/receipts", receipt_payload())).await;
        ids.push(id_of(&created));
    }

    assert_eq!(ids, [1, 2, 3]);
}

#[rstest]
#[case(1)]
#[case(4)]
#[actix_web::test]
async fn batch_items_all_reference_the_path_receipt(#[case] count: usize) {
    let app = init_app().await;
    let receipt_id = id_of(&send(&app, post_json("/api/receipts", receipt_payload())).await);

    let items: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "receiptId": 9_000 + index,
                "name": format!("Item {index}"),
                "price": 1.5,
                "quantity": 1,
            })
        })
        .collect();
    let created = send(
        &app,
        post_json(&format!("/api/receipts/{receipt_id}/items"), json!(items)),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.body.as_array().expect("array response").clone();
    assert_eq!(created.len(), count);
    assert!(created.iter().all(|item| item["receiptId"] == receipt_id));

    let listed = send(&app, get(&format!("/api/receipts/{receipt_id}/items"))).await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(count));
}

#[actix_web::test]
async fn batch_against_missing_receipt_creates_nothing() {
    let app = init_app().await;

    let rejected = send(
        &app,
        post_json(
            "/api/receipts/3/items",
            json!([{"name": "Milk", "price": 1.0, "quantity": 1}]),
        ),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::NOT_FOUND);

    // Receipts 1..=3 now exist; none of them may have picked up the item.
    for _ in 0..3 {
        send(&app, post_json("/api/receipts", receipt_payload())).await;
    }
    for receipt_id in 1..=3 {
        let listed = send(&app, get(&format!("/api/receipts/{receipt_id}/items"))).await;
        assert_eq!(listed.body, json!([]));
    }
}

#[actix_web::test]
async fn delete_removes_only_the_target_and_tolerates_repeats() {
    let app = init_app().await;
    let receipt_id = id_of(&send(&app, post_json("/api/receipts", receipt_payload())).await);
    let items = send(
        &app,
        post_json(
            &format!("/api/receipts/{receipt_id}/items"),
            json!([
                {"name": "Milk", "price": 1.0, "quantity": 1},
                {"name": "Eggs", "price": 2.0, "quantity": 6},
            ]),
        ),
    )
    .await;
    let milk_id = items.body[0]["id"].as_u64().expect("milk id");
    let eggs_id = items.body[1]["id"].as_u64().expect("eggs id");

    for _ in 0..2 {
        let deleted = send(
            &app,
            TestRequest::delete().uri(&format!("/api/receipt-items/{milk_id}")),
        )
        .await;
        assert_eq!(deleted.status, StatusCode::NO_CONTENT);
        assert_eq!(deleted.body, Value::Null);
    }

    let listed = send(&app, get(&format!("/api/receipts/{receipt_id}/items"))).await;
    let remaining: Vec<u64> = listed
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|item| item["id"].as_u64())
        .collect();
    assert_eq!(remaining, [eggs_id]);
}

#[actix_web::test]
async fn receipt_for_unknown_user_is_rejected() {
    let app = init_app().await;
    let mut payload = receipt_payload();
    payload["userId"] = json!(42);

    let rejected = send(&app, post_json("/api/receipts", payload)).await;

    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["details"]["code"], "unknown_user");
}

#[actix_web::test]
async fn responses_carry_cors_and_trace_headers() {
    let app = init_app().await;

    let listed = send(&app, get("/api/receipts")).await;

    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.header("access-control-allow-origin"), Some("*"));
    assert!(listed.header("trace-id").is_some());
}

#[actix_web::test]
async fn preflight_is_answered_without_routing() {
    let app = init_app().await;

    let preflight = send(
        &app,
        TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/receipts/1/items"),
    )
    .await;

    assert_eq!(preflight.status, StatusCode::NO_CONTENT);
    assert_eq!(preflight.header("access-control-allow-origin"), Some("*"));
    assert_eq!(
        preflight.header("access-control-allow-methods"),
        Some("GET, POST, OPTIONS")
    );
    assert_eq!(
        preflight.header("access-control-allow-headers"),
        Some("Content-Type, Authorization, X-Requested-With")
    );
    assert!(preflight.header("trace-id").is_some());
}
