//! Receipt line item API handlers.
//!
//! ```text
//! POST /api/receipts/{receiptId}/items {"name":"Milk","price":1.2,"quantity":2}
//! POST /api/receipts/{receiptId}/items [{"name":"Milk",...},{"name":"Eggs",...}]
//! GET /api/receipts/{receiptId}/items
//! POST /api/receipt-items {"receiptId":1,"name":"Milk","price":1.2,"quantity":2}
//! DELETE /api/receipt-items/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::domain::{Error, NewReceiptItem, ReceiptId, ReceiptItem, ReceiptItemId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::receipts::receipt_not_found;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, Position, expect_object, optional_field, parse_id, parse_name, require,
};

const RECEIPT_ID: FieldName = FieldName::new("receiptId");
const NAME: FieldName = FieldName::new("name");
const PRICE: FieldName = FieldName::new("price");
const QUANTITY: FieldName = FieldName::new("quantity");
const ID_PARAM: FieldName = FieldName::new("id");

/// Body of `POST /api/receipt-items`: one item naming its receipt.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemRequest {
    #[schema(example = 1)]
    pub receipt_id: Option<u64>,
    #[schema(example = "Milk")]
    pub name: Option<String>,
    #[schema(example = 1.2)]
    pub price: Option<f64>,
    #[schema(example = 2)]
    pub quantity: Option<f64>,
}

/// One item in the body of the nested receipt route.
///
/// The receipt comes from the path, so any `receiptId` key in the body is
/// never read.
#[derive(Debug, Default, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemFields {
    #[schema(example = "Milk")]
    pub name: Option<String>,
    #[schema(example = 1.2)]
    pub price: Option<f64>,
    #[schema(example = 2)]
    pub quantity: Option<f64>,
}

impl ReceiptItemFields {
    fn from_json(value: Value, position: Position) -> Result<Self, Error> {
        let object = expect_object(value, position)?;
        Ok(Self {
            name: optional_field(&object, NAME, position)?,
            price: optional_field(&object, PRICE, position)?,
            quantity: optional_field(&object, QUANTITY, position)?,
        })
    }
}

impl From<ReceiptItemRequest> for ReceiptItemFields {
    fn from(request: ReceiptItemRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

/// Body of the nested item route: a single item or an array of items.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ReceiptItemsPayload {
    Many(Vec<ReceiptItemFields>),
    One(ReceiptItemFields),
}

impl ReceiptItemsPayload {
    /// Decode the body element by element so errors can name the field and
    /// the array index.
    fn from_json(value: Value) -> Result<Self, Error> {
        match value {
            Value::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, item)| ReceiptItemFields::from_json(item, Position::at(index)))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            item => ReceiptItemFields::from_json(item, Position::single()).map(Self::One),
        }
    }
}

/// Stored line item as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemResponse {
    #[schema(example = 1)]
    pub id: u64,
    pub receipt_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReceiptItem> for ReceiptItemResponse {
    fn from(item: ReceiptItem) -> Self {
        Self {
            id: item.id().get(),
            receipt_id: item.receipt_id().get(),
            name: item.name().as_str().to_owned(),
            price: item.price(),
            quantity: item.quantity(),
            created_at: item.created_at(),
            updated_at: item.updated_at(),
        }
    }
}

fn parse_item(
    payload: ReceiptItemFields,
    receipt_id: ReceiptId,
    position: Position,
) -> Result<NewReceiptItem, Error> {
    let name = require(payload.name, NAME, position)?;
    let price = require(payload.price, PRICE, position)?;
    let quantity = require(payload.quantity, QUANTITY, position)?;
    Ok(NewReceiptItem {
        receipt_id,
        name: parse_name(name, NAME, position)?,
        price,
        quantity,
    })
}

fn parse_items(
    payload: Vec<ReceiptItemFields>,
    receipt_id: ReceiptId,
) -> Result<Vec<NewReceiptItem>, Error> {
    payload
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_item(item, receipt_id, Position::at(index)))
        .collect()
}

fn into_responses(items: Vec<ReceiptItem>) -> Vec<ReceiptItemResponse> {
    items.into_iter().map(ReceiptItemResponse::from).collect()
}

/// Add one or more items to a receipt.
///
/// The response mirrors the request: an object for a single item, an array
/// for an array. Every item is attached to the receipt in the path whatever
/// its body says. The whole body is validated before anything is stored.
#[utoipa::path(
    post,
    path = "/api/receipts/{receiptId}/items",
    params(("receiptId" = u64, Path, description = "Receipt identifier")),
    request_body = ReceiptItemsPayload,
    responses(
        (status = 201, description = "Item or items created", body = ReceiptItemResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such receipt", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "createReceiptItems"
)]
#[post("/receipts/{receipt_id}/items")]
pub async fn create_receipt_items(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let receipt_id: ReceiptId = parse_id(&path, RECEIPT_ID)?;
    let payload = ReceiptItemsPayload::from_json(payload.into_inner())?;
    state
        .receipts
        .find_by_id(receipt_id)
        .await?
        .ok_or_else(|| receipt_not_found(receipt_id))?;

    match payload {
        ReceiptItemsPayload::One(item) => {
            let draft = parse_item(item, receipt_id, Position::single())?;
            let stored = state.receipt_items.create(draft).await?;
            info!(receipt_id = %receipt_id, item_id = %stored.id(), "receipt item created");
            Ok(HttpResponse::Created().json(ReceiptItemResponse::from(stored)))
        }
        ReceiptItemsPayload::Many(items) => {
            let drafts = parse_items(items, receipt_id)?;
            let stored = state.receipt_items.create_many(receipt_id, drafts).await?;
            info!(receipt_id = %receipt_id, count = stored.len(), "receipt items created");
            Ok(HttpResponse::Created().json(into_responses(stored)))
        }
    }
}

/// List the items of a receipt in insertion order.
#[utoipa::path(
    get,
    path = "/api/receipts/{receiptId}/items",
    params(("receiptId" = u64, Path, description = "Receipt identifier")),
    responses(
        (status = 200, description = "Items on the receipt", body = [ReceiptItemResponse]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "listReceiptItems"
)]
#[get("/receipts/{receipt_id}/items")]
pub async fn list_receipt_items(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ReceiptItemResponse>>> {
    let receipt_id: ReceiptId = parse_id(&path, RECEIPT_ID)?;
    let items = state.receipt_items.list_by_receipt(receipt_id).await?;
    Ok(web::Json(into_responses(items)))
}

/// Add a single item naming its receipt in the body.
#[utoipa::path(
    post,
    path = "/api/receipt-items",
    request_body = ReceiptItemRequest,
    responses(
        (status = 200, description = "Item created", body = ReceiptItemResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such receipt", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "createReceiptItem"
)]
#[post("/receipt-items")]
pub async fn create_receipt_item(
    state: web::Data<HttpState>,
    payload: web::Json<ReceiptItemRequest>,
) -> ApiResult<web::Json<ReceiptItemResponse>> {
    let mut payload = payload.into_inner();
    let position = Position::single();
    let receipt_id = ReceiptId::new(require(payload.receipt_id.take(), RECEIPT_ID, position)?);
    let draft = parse_item(payload.into(), receipt_id, position)?;
    let stored = state.receipt_items.create(draft).await?;
    info!(receipt_id = %receipt_id, item_id = %stored.id(), "receipt item created");
    Ok(web::Json(ReceiptItemResponse::from(stored)))
}

/// Delete an item. Deleting an absent item also succeeds.
#[utoipa::path(
    delete,
    path = "/api/receipt-items/{id}",
    params(("id" = u64, Path, description = "Receipt item identifier")),
    responses(
        (status = 204, description = "Item removed or already absent"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["receipts"],
    operation_id = "deleteReceiptItem"
)]
#[delete("/receipt-items/{id}")]
pub async fn delete_receipt_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: ReceiptItemId = parse_id(&path, ID_PARAM)?;
    let removed = state.receipt_items.delete(id).await?;
    debug!(item_id = %id, removed, "receipt item delete handled");
    Ok(HttpResponse::NoContent().finish())
}
