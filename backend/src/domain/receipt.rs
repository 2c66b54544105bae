//! Receipts and their line items.

use chrono::{DateTime, Utc};

use super::{Name, ReceiptId, ReceiptItemId, UserId};

/// Validated fields for a receipt that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReceipt {
    pub user_id: Option<UserId>,
    pub store_name: Name,
    pub date: DateTime<Utc>,
    pub total: f64,
}

/// Stored receipt.
///
/// `total` is whatever the client sent; it is not reconciled against the
/// item prices and may be negative (refunds).
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    id: ReceiptId,
    user_id: Option<UserId>,
    store_name: Name,
    date: DateTime<Utc>,
    total: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Receipt {
    /// Build a stored receipt from its draft, identifier, and insert time.
    pub fn new(id: ReceiptId, draft: NewReceipt, inserted_at: DateTime<Utc>) -> Self {
        let NewReceipt {
            user_id,
            store_name,
            date,
            total,
        } = draft;
        Self {
            id,
            user_id,
            store_name,
            date,
            total,
            created_at: inserted_at,
            updated_at: inserted_at,
        }
    }

    pub fn id(&self) -> ReceiptId {
        self.id
    }

    /// Owning user, if the receipt was filed against one.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn store_name(&self) -> &Name {
        &self.store_name
    }

    /// Purchase time printed on the receipt.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Validated fields for a line item that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReceiptItem {
    pub receipt_id: ReceiptId,
    pub name: Name,
    pub price: f64,
    pub quantity: f64,
}

impl NewReceiptItem {
    /// Re-point the draft at `receipt_id`, discarding whatever it carried.
    #[must_use]
    pub fn for_receipt(mut self, receipt_id: ReceiptId) -> Self {
        self.receipt_id = receipt_id;
        self
    }
}

/// Stored receipt line item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    id: ReceiptItemId,
    receipt_id: ReceiptId,
    name: Name,
    price: f64,
    quantity: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReceiptItem {
    /// Build a stored item from its draft, identifier, and insert time.
    pub fn new(id: ReceiptItemId, draft: NewReceiptItem, inserted_at: DateTime<Utc>) -> Self {
        let NewReceiptItem {
            receipt_id,
            name,
            price,
            quantity,
        } = draft;
        Self {
            id,
            receipt_id,
            name,
            price,
            quantity,
            created_at: inserted_at,
            updated_at: inserted_at,
        }
    }

    pub fn id(&self) -> ReceiptItemId {
        self.id
    }

    pub fn receipt_id(&self) -> ReceiptId {
        self.receipt_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Quantity; fractional for goods sold by weight.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
