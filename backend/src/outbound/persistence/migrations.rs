//! Embedded schema migrations for the document tables.

use diesel::{Connection as _, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {0}")]
    Connect(String),
    /// A migration failed to apply.
    #[error("failed to apply migrations: {0}")]
    Apply(String),
    /// The blocking migration task did not complete.
    #[error("migration task failed: {0}")]
    Task(String),
}

/// Apply every pending migration to `database_url`.
///
/// Diesel's migration harness is synchronous, so the work runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection or a migration fails.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn =
            PgConnection::establish(&url).map_err(|err| MigrationError::Connect(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;
        info!(applied = applied.len(), "database migrations applied");
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Task(err.to_string()))?
}
