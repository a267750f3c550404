//! HTTP server configuration object.

use std::sync::Arc;

use placeholder_mirror::domain::ports::{DocumentStore, PlaceholderSource};

/// Everything `create_server` needs: the listen address and the driven
/// adapters the services run on.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) store: Arc<dyn DocumentStore>,
    pub(crate) source: Arc<dyn PlaceholderSource>,
}

impl ServerConfig {
    /// Construct a server configuration from a listen address and adapters.
    #[must_use]
    pub fn new(
        bind_addr: (String, u16),
        store: Arc<dyn DocumentStore>,
        source: Arc<dyn PlaceholderSource>,
    ) -> Self {
        Self {
            bind_addr,
            store,
            source,
        }
    }
}
