//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod receipt_items;
pub mod receipts;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod utilities;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` scope and the JSON extractor configuration.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use receipts_backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(
            web::scope("/api")
                .service(receipts::list_receipts)
                .service(receipts::get_receipt)
                .service(receipts::create_receipt)
                .service(receipt_items::create_receipt_items)
                .service(receipt_items::list_receipt_items)
                .service(receipt_items::create_receipt_item)
                .service(receipt_items::delete_receipt_item)
                .service(users::create_user)
                .service(users::get_user)
                .service(users::list_user_receipts)
                .service(utilities::generate_pdf)
                .service(utilities::scrape_product)
                .service(health::health),
        );
}
