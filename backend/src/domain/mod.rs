//! Domain primitives, ports and services.
//!
//! Purpose: define the user, post and comment shapes mirrored from the
//! placeholder API, the ports adapters implement, and the services that
//! drive them. Nothing here depends on HTTP or on a concrete store.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, Post, Comment: decoded remote entities, open to extra fields.
//! - UserDocument: a stored user keyed by its integer `id`.
//! - UsersService, UsersLoadService: use-case implementations.

pub mod denormalize;
pub mod error;
pub mod ports;
pub mod user;
pub mod user_document;
pub mod users_service;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::denormalize::{LOADED_USER_LIMIT, denormalize};
pub use self::error::{Error, ErrorCode};
pub use self::user::{Comment, Fields, Post, User, UserId};
pub use self::user_document::{Document, UserDocument, UserDocumentError};
pub use self::users_service::{UsersLoadService, UsersService};

