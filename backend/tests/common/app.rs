//! Shared application harness for HTTP integration tests.
//!
//! Builds the production app (middleware, routes, Swagger UI) over a fresh
//! in-memory store and exposes a helper that captures status, headers, and
//! the JSON body of a response.

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::test::{self, TestRequest};
use actix_web::web;
use receipts_backend::inbound::http::health::HealthState;
use receipts_backend::outbound::memory::InMemoryStore;
use receipts_backend::server::{build_app, build_http_state};
use serde_json::Value;

/// Response captured for assertions.
pub(crate) struct Captured {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Value,
}

impl Captured {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Initialise the app with readiness set as requested.
pub(crate) async fn init_app_with_health(
    ready: bool,
) -> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = actix_web::Error>
{
    let health = web::Data::new(HealthState::new());
    if ready {
        health.mark_ready();
    }
    let http_state = build_http_state(Arc::new(InMemoryStore::new()));
    test::init_service(build_app(health, http_state)).await
}

/// Initialise a ready app.
pub(crate) async fn init_app()
-> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = actix_web::Error>
{
    init_app_with_health(true).await
}

/// Send `request` and capture the response. Empty bodies become `null`.
pub(crate) async fn send<S>(app: &S, request: TestRequest) -> Captured
where
    S: Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    Captured {
        status,
        headers,
        body,
    }
}
