//! HTTP inbound adapter exposing the mirror's REST endpoints.
//!
//! ```text
//! GET    /load
//! DELETE /users
//! DELETE /users/{id}
//! GET    /users/{id}
//! PUT    /users
//! ```
//!
//! Every other method and path combination answers
//! `404 {"error":"Not Found"}`.

pub mod error;
pub mod load;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;

pub use error::{ApiResult, ErrorBody};
pub use routes::{build_app, configure, not_found};
