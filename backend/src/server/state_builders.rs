//! Builders for the driven adapters and the HTTP state wired on top of them.

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::info;
use url::Url;

use placeholder_mirror::config::ServerSettings;
use placeholder_mirror::domain::ports::{DocumentStore, PlaceholderSource};
use placeholder_mirror::domain::{UsersLoadService, UsersService};
use placeholder_mirror::inbound::http::state::HttpState;
use placeholder_mirror::outbound::memory::InMemoryDocumentStore;
use placeholder_mirror::outbound::persistence::{
    DbPool, DieselDocumentStore, PoolConfig, run_migrations,
};
use placeholder_mirror::outbound::placeholder::PlaceholderHttpSource;

use super::ServerConfig;

/// Build the document store selected by the settings.
///
/// With a database URL, pending migrations run before the pool is created;
/// without one the store lives in process memory.
///
/// # Errors
/// Returns [`io::Error`] when migrations fail or the pool cannot be built.
pub(crate) async fn build_store(settings: &ServerSettings) -> io::Result<Arc<dyn DocumentStore>> {
    let Some(database_url) = settings.database_url() else {
        info!("no database URL configured; using in-memory document store");
        return Ok(Arc::new(InMemoryDocumentStore::new()));
    };

    run_migrations(database_url).await.map_err(io::Error::other)?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(io::Error::other)?;
    info!("using PostgreSQL document store");
    Ok(Arc::new(DieselDocumentStore::new(pool)))
}

/// Build the remote placeholder source from the settings.
///
/// # Errors
/// Returns [`io::Error`] when the base URL is invalid or the HTTP client
/// cannot be built.
pub(crate) fn build_source(settings: &ServerSettings) -> io::Result<Arc<dyn PlaceholderSource>> {
    let base = Url::parse(settings.source_url()).map_err(|err| {
        io::Error::other(format!(
            "invalid placeholder source URL {}: {err}",
            settings.source_url()
        ))
    })?;
    let source =
        PlaceholderHttpSource::new(base, settings.source_timeout()).map_err(io::Error::other)?;
    Ok(Arc::new(source))
}

/// Wire the use-case services over the configured adapters.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let users = Arc::new(UsersService::new(config.store.clone()));
    let load = Arc::new(UsersLoadService::new(
        config.source.clone(),
        config.store.clone(),
    ));
    web::Data::new(HttpState::new(load, users.clone(), users))
}
