//! Async-safe connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async` and `bb8` so the document store can check out
//! connections without blocking the runtime. Every failure is reported as a
//! [`PoolError`], which the store maps to a connection error.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::domain::ports::define_port_error;

define_port_error! {
    /// Failures building the pool or checking out a connection.
    pub enum PoolError {
        /// No connection became available within the checkout timeout.
        Checkout { message: String } => "failed to get connection from pool: {message}",
        /// The pool could not be constructed from its configuration.
        Build { message: String } => "failed to build connection pool: {message}",
    }
}

impl PoolError {
    /// Human-readable detail without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use placeholder_mirror::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://mirror@localhost/mirror")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration for `database_url`.
    ///
    /// Defaults: at most 10 connections, none kept idle, and a 30 second
    /// checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: None,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Set the minimum number of idle connections to maintain.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database URL the pool connects to.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum number of pooled connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Async connection pool for PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
