//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **placeholder**: reqwest client for the remote placeholder API
//! - **persistence**: PostgreSQL JSONB document store using Diesel
//! - **memory**: in-process document store used without a database
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod placeholder;
