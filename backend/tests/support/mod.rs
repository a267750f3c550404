//! Shared fixtures for end-to-end HTTP tests.
//!
//! Tests drive the real application builder over the in-memory document
//! store and a stub placeholder source, so no network or database is needed.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use placeholder_mirror::domain::ports::{PlaceholderSource, PlaceholderSourceError};
use placeholder_mirror::domain::{Comment, Post, User, UsersLoadService, UsersService};
use placeholder_mirror::inbound::http::{ErrorBody, build_app};
use placeholder_mirror::inbound::http::state::HttpState;
use placeholder_mirror::outbound::memory::InMemoryDocumentStore;

/// Placeholder source serving fixed collections.
pub struct StubSource {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    fail_posts: bool,
    fetches: AtomicUsize,
}

impl StubSource {
    /// Source with `user_count` users, where user 3 owns posts 10 and 11 and
    /// post 10 carries comment 100. User 4 owns post 12 with comment 101,
    /// and post 13 belongs to user 14, beyond the loaded range.
    pub fn scenario(user_count: i64) -> Self {
        let users = (1..=user_count).map(user).collect();
        let posts = vec![
            post(10, 3),
            post(12, 4),
            post(11, 3),
            post(13, 14),
        ];
        let comments = vec![comment(100, 10), comment(101, 12), comment(102, 13)];
        Self {
            users,
            posts,
            comments,
            fail_posts: false,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Replace the source users, keeping the scenario's posts and comments.
    #[allow(dead_code, reason = "only the load scenarios swap users")]
    pub fn with_users(self, users: Vec<User>) -> Self {
        Self { users, ..self }
    }

    /// Source whose posts endpoint answers 503.
    pub fn failing() -> Self {
        Self {
            fail_posts: true,
            ..Self::scenario(3)
        }
    }

    /// Number of completed fetch calls across all collections.
    #[allow(dead_code, reason = "only the load scenarios count fetches")]
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceholderSource for StubSource {
    async fn fetch_users(&self) -> Result<Vec<User>, PlaceholderSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.clone())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, PlaceholderSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_posts {
            return Err(PlaceholderSourceError::status(503_u16, "unavailable"));
        }
        Ok(self.posts.clone())
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, PlaceholderSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.comments.clone())
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture decodes")
}

/// Remote-shaped user with the given id.
pub fn user(id: i64) -> User {
    decode(json!({
        "id": id,
        "name": format!("User {id}"),
        "username": format!("user{id}"),
        "email": format!("user{id}@example.test"),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }))
}

fn post(id: i64, user_id: i64) -> Post {
    decode(json!({ "userId": user_id, "id": id, "title": format!("post {id}"), "body": "body" }))
}

fn comment(id: i64, post_id: i64) -> Comment {
    decode(json!({
        "postId": post_id,
        "id": id,
        "name": format!("comment {id}"),
        "email": "reader@example.test",
        "body": "body"
    }))
}

/// Application handle plus the adapters behind it.
pub struct Mirror {
    /// Store backing every endpoint.
    pub store: Arc<InMemoryDocumentStore>,
    /// Source used by `GET /load`.
    pub source: Arc<StubSource>,
}

impl Mirror {
    /// Wire services over a fresh in-memory store and `source`.
    pub fn new(source: StubSource) -> Self {
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
            source: Arc::new(source),
        }
    }

    /// Build the full application for `actix_web::test` calls.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let users = Arc::new(UsersService::new(self.store.clone()));
        let load = Arc::new(UsersLoadService::new(self.source.clone(), self.store.clone()));
        let state = HttpState::new(load, users.clone(), users);
        build_app(web::Data::new(state))
    }
}

/// Decode an `{"error": ...}` body and return its message.
pub async fn error_message(response: ServiceResponse) -> String {
    let body: ErrorBody = actix_test::read_body_json(response).await;
    body.error
}
