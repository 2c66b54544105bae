//! Port for receipt storage.

use async_trait::async_trait;

use crate::domain::{NewReceipt, Receipt, ReceiptId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by receipt repository adapters.
    pub enum ReceiptRepositoryError {
        /// The receipt references a user that does not exist.
        UnknownUser { user_id: UserId } => "user {user_id} does not exist",
        /// The backing store could not serve the request.
        Unavailable { message: String } => "receipt repository unavailable: {message}",
    }
}

/// Storage contract for receipts.
///
/// Listings are returned in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Store a new receipt, validating the optional user reference.
    async fn create(&self, receipt: NewReceipt) -> Result<Receipt, ReceiptRepositoryError>;

    /// Fetch a receipt by identifier.
    async fn find_by_id(&self, id: ReceiptId) -> Result<Option<Receipt>, ReceiptRepositoryError>;

    /// Every stored receipt.
    async fn list_all(&self) -> Result<Vec<Receipt>, ReceiptRepositoryError>;

    /// Receipts filed against `user_id`; empty when the user has none or does
    /// not exist.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Receipt>, ReceiptRepositoryError>;
}
