//! Port for receipt line item storage.

use async_trait::async_trait;

use crate::domain::{NewReceiptItem, ReceiptId, ReceiptItem, ReceiptItemId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by receipt item repository adapters.
    pub enum ReceiptItemRepositoryError {
        /// The item references a receipt that does not exist.
        UnknownReceipt { receipt_id: ReceiptId } => "receipt {receipt_id} does not exist",
        /// The backing store could not serve the request.
        Unavailable { message: String } => "receipt item repository unavailable: {message}",
    }
}

/// Storage contract for receipt line items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceiptItemRepository: Send + Sync {
    /// Store one item after checking its receipt exists.
    async fn create(&self, item: NewReceiptItem) -> Result<ReceiptItem, ReceiptItemRepositoryError>;

    /// Store a batch of items for `receipt_id`.
    ///
    /// Each draft's own receipt reference is replaced with `receipt_id`. The
    /// batch is all-or-nothing: when the receipt is missing nothing is stored.
    async fn create_many(
        &self,
        receipt_id: ReceiptId,
        items: Vec<NewReceiptItem>,
    ) -> Result<Vec<ReceiptItem>, ReceiptItemRepositoryError>;

    /// Items belonging to `receipt_id`, in insertion order.
    async fn list_by_receipt(
        &self,
        receipt_id: ReceiptId,
    ) -> Result<Vec<ReceiptItem>, ReceiptItemRepositoryError>;

    /// Remove an item. Returns `false` when nothing matched; absence is not
    /// an error.
    async fn delete(&self, id: ReceiptItemId) -> Result<bool, ReceiptItemRepositoryError>;
}
