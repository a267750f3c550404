//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersLoadCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use placeholder_mirror::domain::{UsersLoadService, UsersService};
/// use placeholder_mirror::inbound::http::state::HttpState;
/// use placeholder_mirror::outbound::memory::InMemoryDocumentStore;
/// use placeholder_mirror::outbound::placeholder::PlaceholderHttpSource;
///
/// let store = Arc::new(InMemoryDocumentStore::new());
/// let source = Arc::new(
///     PlaceholderHttpSource::new(
///         "https://jsonplaceholder.typicode.com".parse().expect("url"),
///         std::time::Duration::from_secs(5),
///     )
///     .expect("client"),
/// );
/// let users = Arc::new(UsersService::new(store.clone()));
/// let state = HttpState::new(
///     Arc::new(UsersLoadService::new(source, store)),
///     users.clone(),
///     users,
/// );
/// let _query = state.users_query.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Refreshes the store from the remote source.
    pub load: Arc<dyn UsersLoadCommand>,
    /// Reads stored users.
    pub users_query: Arc<dyn UsersQuery>,
    /// Creates and deletes stored users.
    pub users: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from the three use-case ports.
    pub fn new(
        load: Arc<dyn UsersLoadCommand>,
        users_query: Arc<dyn UsersQuery>,
        users: Arc<dyn UsersCommand>,
    ) -> Self {
        Self {
            load,
            users_query,
            users,
        }
    }
}
