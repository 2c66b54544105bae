//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{
    MockReceiptItemRepository, MockReceiptRepository, MockUserRepository,
};
use crate::inbound::http::configure;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// State backed by a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    HttpState::new(store.clone(), store.clone(), store)
}

/// State whose ports are mocks with no expectations unless configured.
pub fn mock_state(
    users: MockUserRepository,
    receipts: MockReceiptRepository,
    receipt_items: MockReceiptItemRepository,
) -> HttpState {
    HttpState::new(Arc::new(users), Arc::new(receipts), Arc::new(receipt_items))
}

/// Application with every `/api` route registered over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .configure(configure)
}
