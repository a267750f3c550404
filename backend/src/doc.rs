//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] lists every HTTP endpoint from the inbound layer together with
//! the user and error schemas. The document is exported with
//! `cargo run --bin openapi-dump`; it is not served over HTTP.

use utoipa::OpenApi;

use crate::inbound::http::ErrorBody;
use crate::inbound::http::schemas::{
    AddressSchema, CommentSchema, CompanySchema, GeoSchema, PostSchema, UserSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Placeholder mirror API",
        description = "Loads JSONPlaceholder users with their posts and comments into a \
                       document store and serves them.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::load::load_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::delete_all_users,
        crate::inbound::http::users::create_user,
    ),
    components(schemas(
        ErrorBody,
        UserSchema,
        PostSchema,
        CommentSchema,
        AddressSchema,
        CompanySchema,
        GeoSchema
    )),
    tags(
        (name = "load", description = "Refresh from the remote source"),
        (name = "users", description = "Stored user documents")
    )
)]
pub struct ApiDoc;
