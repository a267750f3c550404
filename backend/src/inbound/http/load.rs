//! Load API handler.
//!
//! ```text
//! GET /load
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Refresh the stored users from the remote placeholder API.
///
/// Clears the `users`, `posts` and `comments` collections and stores the
/// first ten remote users with their posts and comments embedded.
#[utoipa::path(
    get,
    path = "/load",
    responses(
        (status = 200, description = "Users reloaded"),
        (status = 500, description = "Fetch or storage failure", body = ErrorBody)
    ),
    tags = ["load"],
    operation_id = "loadUsers"
)]
#[get("/load")]
pub async fn load_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.load.load().await?;
    Ok(HttpResponse::Ok().finish())
}
