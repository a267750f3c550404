//! Driven port for the remote read-only placeholder API.
//!
//! The remote API serves users, posts and comments as flat JSON arrays. The
//! domain owns the decoded entity shapes so load orchestration stays
//! adapter-agnostic.

use async_trait::async_trait;

use crate::domain::{Comment, Post, User};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while fetching from the remote source.
    pub enum PlaceholderSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "placeholder source transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "placeholder source timed out: {message}",
        /// The source answered with a non-success status.
        Status { status: u16, message: String } =>
            "placeholder source returned status {status}: {message}",
        /// The response body was not the expected JSON array.
        Decode { message: String } =>
            "placeholder source response decode failed: {message}",
    }
}

/// Port for fetching the three flat collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceholderSource: Send + Sync {
    /// Fetch every user, in source order.
    async fn fetch_users(&self) -> Result<Vec<User>, PlaceholderSourceError>;

    /// Fetch every post, in source order.
    async fn fetch_posts(&self) -> Result<Vec<Post>, PlaceholderSourceError>;

    /// Fetch every comment, in source order.
    async fn fetch_comments(&self) -> Result<Vec<Comment>, PlaceholderSourceError>;
}
