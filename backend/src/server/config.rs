//! HTTP server configuration object and helpers.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use super::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: Option<usize>,
}

impl ServerConfig {
    /// Construct a configuration binding to `bind_addr` with default workers.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            workers: None,
        }
    }

    /// Resolve the settings' host and port into a bind address.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the host does not resolve.
    pub fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let host = settings.host();
        let port = settings.port;
        let bind_addr = (host, port).to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("host {host} did not resolve to an address"),
            )
        })?;
        Ok(Self::new(bind_addr).with_workers(settings.workers))
    }

    /// Override the Actix worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured worker count, if any.
    #[must_use]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }
}
