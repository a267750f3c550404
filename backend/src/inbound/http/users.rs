//! Users API handlers.
//!
//! ```text
//! GET    /users/{id}
//! DELETE /users/{id}
//! DELETE /users
//! PUT    /users {"id": 11, "name": "Ada"}
//! ```
//!
//! Path identifiers are decimal digits only; anything else falls through to
//! the not-found handler. Stored documents are returned exactly as written.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, delete, get, put, web};
use serde_json::Value;

use crate::domain::{Error, UserDocument, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Message returned when a request body cannot be used as a user document.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Message returned when a request body exceeds [`MAX_BODY_BYTES`].
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Largest `PUT /users` body read into memory.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Turn a failed body read into the JSON error envelope.
fn read_body(body: Result<web::Bytes, actix_web::Error>) -> Result<web::Bytes, Error> {
    body.map_err(|err| {
        if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::payload_too_large(BODY_TOO_LARGE_MESSAGE)
        } else {
            Error::invalid_request(INVALID_BODY_MESSAGE)
        }
    })
}

/// Return the stored document for one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "Decimal user identifier")),
    responses(
        (status = 200, description = "Stored user document", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id:\\d+}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let user = state.users_query.get_user(id).await?;
    Ok(HttpResponse::Ok().json(Value::from(user)))
}

/// Remove every stored user.
#[utoipa::path(
    delete,
    path = "/users",
    responses(
        (status = 200, description = "All users removed"),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteAllUsers"
)]
#[delete("/users")]
pub async fn delete_all_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.users.delete_all_users().await?;
    Ok(HttpResponse::Ok().finish())
}

/// Remove one stored user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "Decimal user identifier")),
    responses(
        (status = 200, description = "User removed"),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id:\\d+}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.users.delete_user(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Store a new user document verbatim.
///
/// The body must be a JSON object with an integer `id`; no other field is
/// checked. Bodies up to [`MAX_BODY_BYTES`] are accepted.
#[utoipa::path(
    put,
    path = "/users",
    request_body(content = UserSchema, description = "User document with an integer id"),
    responses(
        (status = 201, description = "User created", body = UserSchema,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "User already exists", body = ErrorBody),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[put("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let body = read_body(body)?;
    let user =
        UserDocument::from_slice(&body).map_err(|_| Error::invalid_request(INVALID_BODY_MESSAGE))?;
    let created = state.users.create_user(user).await?;
    let location = format!("/users/{}", created.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(Value::from(created)))
}
