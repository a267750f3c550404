//! Reqwest-backed placeholder source adapter.
//!
//! This adapter owns transport details only: URL resolution, timeout and
//! HTTP error mapping, and JSON decoding into domain entities.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::ports::{PlaceholderSource, PlaceholderSourceError};
use crate::domain::{Comment, Post, User};

const USER_AGENT: &str = concat!("placeholder-mirror/", env!("CARGO_PKG_VERSION"));

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum PlaceholderHttpSourceError {
    /// The base URL cannot carry collection paths.
    #[error("invalid placeholder base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
    /// The HTTP client could not be constructed.
    #[error("failed to build placeholder HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Placeholder source adapter issuing GET requests below one base URL.
pub struct PlaceholderHttpSource {
    client: Client,
    users_url: Url,
    posts_url: Url,
    comments_url: Url,
}

impl PlaceholderHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// Collections resolve relative to `base`, so
    /// `https://jsonplaceholder.typicode.com` yields `.../users`, `.../posts`
    /// and `.../comments`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base` cannot hold path segments or when the
    /// reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, PlaceholderHttpSourceError> {
        let base = with_trailing_slash(base);
        let resolve = |name: &str| {
            base.join(name)
                .map_err(|err| PlaceholderHttpSourceError::InvalidBaseUrl {
                    url: base.to_string(),
                    message: err.to_string(),
                })
        };
        if base.cannot_be_a_base() {
            return Err(PlaceholderHttpSourceError::InvalidBaseUrl {
                url: base.to_string(),
                message: "URL cannot be a base".to_owned(),
            });
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            users_url: resolve("users")?,
            posts_url: resolve("posts")?,
            comments_url: resolve("comments")?,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &Url,
    ) -> Result<Vec<T>, PlaceholderSourceError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        debug!(url = %url, bytes = body.len(), "fetched placeholder collection");
        parse_collection(body.as_ref())
    }
}

#[async_trait]
impl PlaceholderSource for PlaceholderHttpSource {
    async fn fetch_users(&self) -> Result<Vec<User>, PlaceholderSourceError> {
        self.fetch(&self.users_url).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, PlaceholderSourceError> {
        self.fetch(&self.posts_url).await
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, PlaceholderSourceError> {
        self.fetch(&self.comments_url).await
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

fn parse_collection<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, PlaceholderSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        PlaceholderSourceError::decode(format!("invalid placeholder JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> PlaceholderSourceError {
    if error.is_timeout() {
        PlaceholderSourceError::timeout(error.to_string())
    } else {
        PlaceholderSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PlaceholderSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PlaceholderSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => PlaceholderSourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
