//! Receipts API handlers.
//!
//! ```text
//! GET /api/receipts
//! GET /api/receipts/{id}
//! POST /api/receipts {"storeName":"Corner Shop","date":"2024-05-01T10:00:00Z","total":12.5}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, NewReceipt, Receipt, ReceiptId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, Position, parse_id, parse_name, parse_rfc3339_timestamp, require,
};

const STORE_NAME: FieldName = FieldName::new("storeName");
const DATE: FieldName = FieldName::new("date");
const TOTAL: FieldName = FieldName::new("total");
const ID_PARAM: FieldName = FieldName::new("id");

/// Request body for `POST /api/receipts`.
///
/// `userId` may be omitted or `null` for receipts not filed against a user.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceiptRequest {
    #[schema(example = 1)]
    pub user_id: Option<u64>,
    #[schema(example = "Corner Shop")]
    pub store_name: Option<String>,
    /// RFC 3339 purchase time.
    #[schema(example = "2024-05-01T10:00:00Z")]
    pub date: Option<String>,
    #[schema(example = 12.5)]
    pub total: Option<f64>,
}

/// Stored receipt as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    #[schema(example = 1)]
    pub id: u64,
    pub user_id: Option<u64>,
    pub store_name: String,
    pub date: DateTime<Utc>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id().get(),
            user_id: receipt.user_id().map(UserId::get),
            store_name: receipt.store_name().as_str().to_owned(),
            date: receipt.date(),
            total: receipt.total(),
            created_at: receipt.created_at(),
            updated_at: receipt.updated_at(),
        }
    }
}

fn parse_create_receipt_request(payload: CreateReceiptRequest) -> Result<NewReceipt, Error> {
    let position = Position::single();
    let store_name = require(payload.store_name, STORE_NAME, position)?;
    let date = require(payload.date, DATE, position)?;
    let total = require(payload.total, TOTAL, position)?;
    Ok(NewReceipt {
        user_id: payload.user_id.map(UserId::new),
        store_name: parse_name(store_name, STORE_NAME, position)?,
        date: parse_rfc3339_timestamp(date, DATE)?,
        total,
    })
}

pub(crate) fn receipt_not_found(id: ReceiptId) -> Error {
    Error::not_found(format!("receipt {id} not found"))
}

/// List every receipt, oldest first.
#[utoipa::path(
    get,
    path = "/api/receipts",
    responses(
        (status = 200, description = "All receipts", body = [ReceiptResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "listReceipts"
)]
#[get("/receipts")]
pub async fn list_receipts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ReceiptResponse>>> {
    let receipts = state.receipts.list_all().await?;
    Ok(web::Json(
        receipts.into_iter().map(ReceiptResponse::from).collect(),
    ))
}

/// Fetch a receipt by identifier.
#[utoipa::path(
    get,
    path = "/api/receipts/{id}",
    params(("id" = u64, Path, description = "Receipt identifier")),
    responses(
        (status = 200, description = "Receipt", body = ReceiptResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such receipt", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "getReceipt"
)]
#[get("/receipts/{id}")]
pub async fn get_receipt(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReceiptResponse>> {
    let id: ReceiptId = parse_id(&path, ID_PARAM)?;
    let receipt = state
        .receipts
        .find_by_id(id)
        .await?
        .ok_or_else(|| receipt_not_found(id))?;
    Ok(web::Json(ReceiptResponse::from(receipt)))
}

/// Record a receipt.
#[utoipa::path(
    post,
    path = "/api/receipts",
    request_body = CreateReceiptRequest,
    responses(
        (status = 201, description = "Receipt created", body = ReceiptResponse),
        (status = 400, description = "Invalid request or unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "createReceipt"
)]
#[post("/receipts")]
pub async fn create_receipt(
    state: web::Data<HttpState>,
    payload: web::Json<CreateReceiptRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_receipt_request(payload.into_inner())?;
    let receipt = state.receipts.create(draft).await?;
    info!(receipt_id = %receipt.id(), user_id = ?receipt.user_id().map(UserId::get), "receipt created");
    Ok(HttpResponse::Created().json(ReceiptResponse::from(receipt)))
}

#[cfg(test)]
mod tests;
