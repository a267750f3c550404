//! Service entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use std::io;

use ortho_config::OrthoConfig as _;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use placeholder_mirror::config::ServerSettings;
use server::{ServerConfig, build_source, build_store, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;

    let store = build_store(&settings).await?;
    let source = build_source(&settings)?;
    let config = ServerConfig::new(
        (settings.host().to_owned(), settings.port()),
        store,
        source,
    );

    create_server(config)?.await
}
