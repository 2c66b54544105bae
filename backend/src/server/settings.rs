//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--host`, `--port`, `--workers`), the
//! environment (`RECEIPTS_HOST`, `RECEIPTS_PORT`, `RECEIPTS_WORKERS`) and
//! configuration files, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration values controlling how the HTTP server binds.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECEIPTS")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Number of Actix worker threads; defaults to the number of CPUs.
    pub workers: Option<usize>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}
