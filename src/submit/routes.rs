//! Submission Routes

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, submit_handler, types_handler, SubmitState};

/// Creates the submission microservice router.
///
/// # Endpoints
/// - `GET /types` - In-memory type names
/// - `POST /submit` - Validate and accept a joke
/// - `GET /health` - Health check endpoint
pub fn create_submit_router(state: SubmitState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/types", get(types_handler))
        .route("/submit", post(submit_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
