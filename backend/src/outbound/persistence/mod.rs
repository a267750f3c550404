//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! The document store keeps each collection in its own JSONB table, with
//! async access through `diesel-async` and `bb8` connection pooling. Schema
//! changes ship as embedded migrations applied at start-up.
//!
//! # Example
//!
//! ```ignore
//! use placeholder_mirror::outbound::persistence::{
//!     run_migrations, DbPool, DieselDocumentStore, PoolConfig,
//! };
//!
//! run_migrations("postgres://localhost/mirror").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/mirror")).await?;
//! let store = DieselDocumentStore::new(pool);
//! ```

mod diesel_document_store;
mod migrations;
mod pool;

pub use diesel_document_store::DieselDocumentStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
