//! Placeholder mirror library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the model, ports
//! and services; [`inbound`] adapts HTTP requests onto the use-case ports;
//! [`outbound`] implements the driven ports for the remote API and the
//! document stores.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
