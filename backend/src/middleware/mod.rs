//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely trace
//! correlation and cross-origin headers.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
