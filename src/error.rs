//! Error types for the joke services
//!
//! Handlers are the only place internal failures become HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;
use crate::models::ErrorResponse;

// == Joke Error Enum ==
/// Unified error type for the HTTP surface.
#[derive(Error, Debug)]
pub enum JokeError {
    /// Missing or malformed request fields
    #[error("{0}")]
    InvalidRequest(String),

    /// Submitted type does not exist in the store
    #[error("Invalid type: {0}")]
    UnknownType(String),

    /// Cache holds no jokes at all
    #[error("No jokes available in database")]
    NoJokes,

    /// Store unreachable or query failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for JokeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            JokeError::InvalidRequest(_) | JokeError::UnknownType(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            JokeError::NoJokes => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            JokeError::Store(err) => {
                error!("Store failure while handling request: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, JokeError>;
