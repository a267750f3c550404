//! Driving ports for the users endpoints.
//!
//! Inbound adapters (HTTP handlers) call these use-case ports without
//! importing outbound persistence or remote-source concerns. Production wires
//! them to [`crate::domain::UsersService`] and
//! [`crate::domain::UsersLoadService`]; tests can substitute doubles.

use async_trait::async_trait;

use crate::domain::{Error, UserDocument, UserId};

/// Counts describing one completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// User documents written to the `users` collection.
    pub users: usize,
    /// Posts embedded across those users.
    pub posts: usize,
    /// Comments embedded across those posts.
    pub comments: usize,
}

/// Use-case port refreshing local storage from the remote source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersLoadCommand: Send + Sync {
    /// Fetch, denormalise and replace the stored users.
    async fn load(&self) -> Result<LoadSummary, Error>;
}

/// Use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the stored document for `id`, or a not-found error.
    async fn get_user(&self, id: UserId) -> Result<UserDocument, Error>;
}

/// Use-case port for writing and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Remove every stored user.
    async fn delete_all_users(&self) -> Result<(), Error>;

    /// Remove the user with `id`, or return a not-found error.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;

    /// Store `user` unless its id is already taken.
    async fn create_user(&self, user: UserDocument) -> Result<UserDocument, Error>;
}
