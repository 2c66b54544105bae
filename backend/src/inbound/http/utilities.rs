//! Client helper endpoints.
//!
//! ```text
//! POST /api/generate-pdf
//! POST /api/scrape-product {"url":"https://example.com/store/cool-blue-widget"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, ProductLabel, ProductLabelError, derive_product_label};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::validation::{FieldName, Position, require};

const URL: FieldName = FieldName::new("url");

/// Message returned by `POST /api/generate-pdf`.
pub const PDF_MESSAGE: &str = "PDF generation is handled by the client";

/// Informational response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "PDF generation is handled by the client")]
    pub message: String,
}

/// Request body for `POST /api/scrape-product`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ProductLabelRequest {
    #[schema(example = "https://example.com/store/cool-blue-widget")]
    pub url: Option<String>,
}

/// Label derived from a product URL.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductLabelResponse {
    #[schema(example = "Cool Blue Widget")]
    pub name: String,
    /// Always `"0.00"`; nothing is fetched.
    #[schema(example = "0.00")]
    pub price: String,
}

impl From<ProductLabel> for ProductLabelResponse {
    fn from(label: ProductLabel) -> Self {
        Self {
            name: label.name,
            price: label.price.to_owned(),
        }
    }
}

fn map_label_error(err: ProductLabelError, url: &str) -> Error {
    let code = match err {
        ProductLabelError::InvalidUrl { .. } => "invalid_url",
        ProductLabelError::NoSegment => "no_segment",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": "url",
        "value": url,
        "code": code,
    }))
}

/// Acknowledge a PDF request. Documents are rendered in the browser.
#[utoipa::path(
    post,
    path = "/api/generate-pdf",
    responses((status = 200, description = "Informational message", body = MessageResponse)),
    tags = ["utilities"],
    operation_id = "generatePdf"
)]
#[post("/generate-pdf")]
pub async fn generate_pdf() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: PDF_MESSAGE.to_owned(),
    })
}

/// Derive a product label from a product page URL without fetching it.
#[utoipa::path(
    post,
    path = "/api/scrape-product",
    request_body = ProductLabelRequest,
    responses(
        (status = 200, description = "Derived label", body = ProductLabelResponse),
        (status = 400, description = "Missing or unusable URL", body = ErrorSchema)
    ),
    tags = ["utilities"],
    operation_id = "scrapeProduct"
)]
#[post("/scrape-product")]
pub async fn scrape_product(
    payload: web::Json<ProductLabelRequest>,
) -> ApiResult<web::Json<ProductLabelResponse>> {
    let url = require(payload.into_inner().url, URL, Position::single())?;
    let label = derive_product_label(&url).map_err(|err| map_label_error(err, &url))?;
    Ok(web::Json(ProductLabelResponse::from(label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::Value;

    use crate::inbound::http::error::json_error_handler;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(
                web::scope("/api")
                    .service(generate_pdf)
                    .service(scrape_product),
            )
    }

    #[actix_web::test]
    async fn generate_pdf_returns_message() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/generate-pdf")
            .to_request();
        let body: MessageResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, PDF_MESSAGE);
    }

    #[actix_web::test]
    async fn scrape_product_derives_label() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/scrape-product")
            .set_json(json!({"url": "https://example.com/store/cool-blue-widget"}))
            .to_request();
        let body: ProductLabelResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.name, "Cool Blue Widget");
        assert_eq!(body.price, "0.00");
    }

    #[rstest]
    #[case(json!({"url": "not a url"}), "invalid_url")]
    #[case(json!({}), "missing_field")]
    #[actix_web::test]
    async fn scrape_product_rejects_bad_input(#[case] body: Value, #[case] code: &str) {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/scrape-product")
            .set_json(body)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["details"]["field"], "url");
        assert_eq!(value["details"]["code"], code);
    }
}
