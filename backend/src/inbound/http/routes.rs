//! Route table and application assembly.
//!
//! The five endpoints are registered as method-guarded resources, so a
//! request whose path matches but whose method does not falls through to
//! [`not_found`] like any unknown path.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::PathError;
use actix_web::{App, HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::load::load_users;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{
    MAX_BODY_BYTES, create_user, delete_all_users, delete_user, get_user,
};
use crate::middleware::Trace;

/// Message returned for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Digit-only identifiers that overflow a 64-bit integer cannot name a
/// stored user.
fn user_path_error(error: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(%error, path = req.path(), "rejected user path identifier");
    Error::not_found("User not found").into()
}

/// Register the endpoints and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use placeholder_mirror::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(user_path_error))
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(load_users)
        .service(get_user)
        .service(delete_user)
        .service(delete_all_users)
        .service(create_user);
}

/// Fallback for every request no endpoint accepts.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(NOT_FOUND_MESSAGE))
}

/// Assemble the application: shared state, tracing, routes and fallback.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}
