//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store for users, receipts, and line items.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no request handling logic. A durable adapter would implement
//! the same ports and slot into `HttpState` unchanged.

pub mod memory;
