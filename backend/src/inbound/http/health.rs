//! Health endpoint for load balancers and local tooling.
//!
//! The server starts "starting" and flips to ready once its listener is
//! bound.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared readiness flag.
pub struct HealthState {
    ready: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

/// Health payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` once ready, `starting` before.
    #[schema(example = "ok")]
    pub status: String,
}

/// Report whether the server is ready to handle traffic.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is ready", body = HealthResponse),
        (status = 503, description = "Server is not ready yet", body = HealthResponse)
    ),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    let (mut response, status) = if state.is_ready() {
        (HttpResponse::Ok(), "ok")
    } else {
        (HttpResponse::ServiceUnavailable(), "starting")
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthResponse {
            status: status.to_owned(),
        })
}
