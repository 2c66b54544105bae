//! Domain primitives, entities, and ports.
//!
//! Purpose: define the receipt, line item, and user entities together with
//! their validated value types, keeping them free of HTTP and storage
//! concerns. Constructors validate; stored records are immutable.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Receipt, ReceiptItem and their `New*` drafts.
//! - Name, EmailAddress: validated text values.
//! - UserId, ReceiptId, ReceiptItemId: store-assigned numeric identifiers.
//! - derive_product_label: URL to product label helper.
//! - ports: repository traits implemented by outbound adapters.

pub mod error;
pub mod ids;
pub mod ports;
pub mod product_label;
pub mod receipt;
pub mod text;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{ReceiptId, ReceiptItemId, UserId};
pub use self::product_label::{
    PLACEHOLDER_PRICE, ProductLabel, ProductLabelError, derive_product_label,
};
pub use self::receipt::{NewReceipt, NewReceiptItem, Receipt, ReceiptItem};
pub use self::text::{EmailAddress, Name, TextValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User};
