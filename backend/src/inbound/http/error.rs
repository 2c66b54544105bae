//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain and repository failures into consistent JSON
//! responses and status codes.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::{
    ReceiptItemRepositoryError, ReceiptRepositoryError, UserRepositoryError,
};
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::validation::invalid_json_error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, trace_id = ?self.trace_id(), "request failed");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

impl From<UserRepositoryError> for Error {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateEmail { email } => {
                Self::conflict(format!("email {email} is already registered"))
                    .with_details(json!({ "field": "email", "code": "duplicate_email" }))
            }
            UserRepositoryError::Unavailable { message } => {
                Self::internal(format!("user repository unavailable: {message}"))
            }
        }
    }
}

impl From<ReceiptRepositoryError> for Error {
    fn from(err: ReceiptRepositoryError) -> Self {
        match err {
            ReceiptRepositoryError::UnknownUser { user_id } => {
                Self::invalid_request(format!("userId {user_id} does not match any user"))
                    .with_details(json!({
                        "field": "userId",
                        "value": user_id.get(),
                        "code": "unknown_user",
                    }))
            }
            ReceiptRepositoryError::Unavailable { message } => {
                Self::internal(format!("receipt repository unavailable: {message}"))
            }
        }
    }
}

impl From<ReceiptItemRepositoryError> for Error {
    fn from(err: ReceiptItemRepositoryError) -> Self {
        match err {
            ReceiptItemRepositoryError::UnknownReceipt { receipt_id } => {
                Self::not_found(format!("receipt {receipt_id} not found"))
            }
            ReceiptItemRepositoryError::Unavailable { message } => {
                Self::internal(format!("receipt item repository unavailable: {message}"))
            }
        }
    }
}

/// `JsonConfig` error handler turning extractor failures into the standard
/// error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected JSON payload");
    let reason = match &err {
        JsonPayloadError::ContentType => "expected Content-Type: application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };
    invalid_json_error(&reason).into()
}
