//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use hello_kit::domain::ports::{FixtureUserSource, UserSource};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) user_source: Arc<dyn UserSource>,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr`.
    ///
    /// User lookups answer from the fixture source until
    /// [`ServerConfig::with_user_source`] supplies a real adapter.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            user_source: Arc::new(FixtureUserSource),
        }
    }

    /// Attach the adapter used for remote user lookups.
    #[must_use]
    pub fn with_user_source(mut self, source: Arc<dyn UserSource>) -> Self {
        self.user_source = source;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(not(test), expect(dead_code, reason = "Exercised by unit tests only"))]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
