//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning failures
//! into `{"error": "<message>"}` JSON bodies with matching status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of internal failure details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// JSON error envelope returned by every failing endpoint.
///
/// # Examples
/// ```
/// use placeholder_mirror::inbound::http::ErrorBody;
///
/// let body = ErrorBody::new("User not found");
/// assert_eq!(
///     serde_json::to_string(&body).expect("serialises"),
///     r#"{"error":"User not found"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "User not found")]
    pub error: String,
}

impl ErrorBody {
    /// Wrap a message in the error envelope.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_body(error: &Error) -> ErrorBody {
    if matches!(error.code(), ErrorCode::InternalError) {
        ErrorBody::new(INTERNAL_ERROR_MESSAGE)
    } else {
        ErrorBody::new(error.message())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, "request failed with internal error");
        } else {
            debug!(error = %self, "request rejected");
        }
        HttpResponse::build(self.status_code()).json(public_body(self))
    }
}
