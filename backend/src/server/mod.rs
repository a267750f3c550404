//! Server construction and wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub(crate) use state_builders::{build_source, build_store};

use actix_web::HttpServer;
use actix_web::dev::Server;
use tracing::info;

use placeholder_mirror::inbound::http::build_app;
use state_builders::build_http_state;

/// Construct an Actix HTTP server for the given configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let ServerConfig { bind_addr, .. } = config;

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(&bind_addr)?
        .run();

    info!(host = %bind_addr.0, port = bind_addr.1, "HTTP server listening");
    Ok(server)
}
