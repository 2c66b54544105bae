//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request and response DTOs and the domain error wrappers
//! ([`ErrorSchema`], [`ErrorCodeSchema`]).
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::receipt_items::{
    ReceiptItemFields, ReceiptItemRequest, ReceiptItemResponse, ReceiptItemsPayload,
};
use crate::inbound::http::receipts::{CreateReceiptRequest, ReceiptResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequest, UserResponse};
use crate::inbound::http::utilities::{MessageResponse, ProductLabelRequest, ProductLabelResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Receipts backend API",
        description = "Receipts, their line items, and the users who own them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::receipts::list_receipts,
        crate::inbound::http::receipts::get_receipt,
        crate::inbound::http::receipts::create_receipt,
        crate::inbound::http::receipt_items::create_receipt_items,
        crate::inbound::http::receipt_items::list_receipt_items,
        crate::inbound::http::receipt_items::create_receipt_item,
        crate::inbound::http::receipt_items::delete_receipt_item,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_user_receipts,
        crate::inbound::http::utilities::generate_pdf,
        crate::inbound::http::utilities::scrape_product,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        CreateReceiptRequest,
        ReceiptResponse,
        ReceiptItemRequest,
        ReceiptItemFields,
        ReceiptItemsPayload,
        ReceiptItemResponse,
        CreateUserRequest,
        UserResponse,
        MessageResponse,
        ProductLabelRequest,
        ProductLabelResponse,
        HealthResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "receipts", description = "Receipts and their line items"),
        (name = "users", description = "Operations related to users"),
        (name = "utilities", description = "Client helper endpoints"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
