//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MIRROR_*` environment variables and config
//! files, merged by `ortho_config`. The port carries its default in the
//! derive; the remaining fields are optional and their accessors apply the
//! defaults.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration for the mirror service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MIRROR")]
pub struct ServerSettings {
    /// Interface the HTTP listener binds to.
    pub host: Option<String>,
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// PostgreSQL URL; without one the store lives in process memory.
    pub database_url: Option<String>,
    /// Base URL of the placeholder API.
    pub source_url: Option<String>,
    /// Per-request timeout for placeholder fetches, in seconds.
    pub source_timeout_secs: Option<u64>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: 3000,
            database_url: None,
            source_url: None,
            source_timeout_secs: None,
            db_max_connections: None,
        }
    }
}

impl ServerSettings {
    /// Interface to bind, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Database URL when PostgreSQL persistence is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Placeholder API base URL, falling back to the public JSONPlaceholder.
    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }

    /// Placeholder request timeout; zero is raised to one second.
    pub fn source_timeout(&self) -> Duration {
        let secs = self
            .source_timeout_secs
            .unwrap_or(DEFAULT_SOURCE_TIMEOUT_SECS)
            .max(1);
        Duration::from_secs(secs)
    }

    /// Pool size for PostgreSQL connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}
