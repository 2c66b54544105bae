//! Receipts backend library modules.
//!
//! Layout follows a hexagonal split: [`domain`] holds entities and ports,
//! [`inbound`] adapts HTTP onto the ports, [`outbound`] implements them, and
//! [`server`] wires everything into an Actix server.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Cors, Trace};
