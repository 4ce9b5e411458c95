//! Submission Handlers
//!
//! HTTP handlers for the submission microservice.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use super::registry::TypeRegistry;
use crate::error::{JokeError, Result};
use crate::models::{HealthResponse, SubmissionRequest, SubmissionResponse, SubmittedJoke};

/// State shared by the submission handlers.
#[derive(Clone, Default)]
pub struct SubmitState {
    /// Known type names
    pub types: Arc<RwLock<TypeRegistry>>,
}

impl SubmitState {
    pub fn new(types: TypeRegistry) -> Self {
        Self {
            types: Arc::new(RwLock::new(types)),
        }
    }
}

/// Handler for GET /types
pub async fn types_handler(State(state): State<SubmitState>) -> Json<Vec<String>> {
    Json(state.types.read().await.names().to_vec())
}

/// Handler for POST /submit
///
/// Accepts the joke and echoes it back; it is not stored anywhere.
pub async fn submit_handler(
    State(state): State<SubmitState>,
    payload: std::result::Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>> {
    let Json(req) = payload.map_err(|e| JokeError::InvalidRequest(e.body_text()))?;
    let submission = req.validate().map_err(JokeError::InvalidRequest)?;

    let joke_type = state
        .types
        .write()
        .await
        .resolve(&submission)
        .ok_or_else(|| JokeError::InvalidRequest("All fields required".to_string()))?;
    info!("Accepted joke submission of type '{}'", joke_type);

    Ok(Json(SubmissionResponse::accepted(SubmittedJoke {
        setup: submission.setup,
        punchline: submission.punchline,
        joke_type,
    })))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
