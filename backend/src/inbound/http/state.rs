//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{ReceiptItemRepository, ReceiptRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub receipts: Arc<dyn ReceiptRepository>,
    pub receipt_items: Arc<dyn ReceiptItemRepository>,
}

impl HttpState {
    /// Construct state from one port implementation per resource.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use receipts_backend::inbound::http::state::HttpState;
    /// use receipts_backend::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::new(store.clone(), store.clone(), store);
    /// let _users = state.users.clone();
    /// ```
    pub fn new(
        users: Arc<dyn UserRepository>,
        receipts: Arc<dyn ReceiptRepository>,
        receipt_items: Arc<dyn ReceiptItemRepository>,
    ) -> Self {
        Self {
            users,
            receipts,
            receipt_items,
        }
    }
}
