//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Inbound adapters only see these traits; the in-memory store in
//! [`crate::outbound::memory`] is one implementation of all three.

mod macros;
pub(crate) use macros::define_port_error;

mod receipt_item_repository;
mod receipt_repository;
mod user_repository;

#[cfg(test)]
pub use receipt_item_repository::MockReceiptItemRepository;
pub use receipt_item_repository::{ReceiptItemRepository, ReceiptItemRepositoryError};
#[cfg(test)]
pub use receipt_repository::MockReceiptRepository;
pub use receipt_repository::{ReceiptRepository, ReceiptRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
