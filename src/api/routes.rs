//! API Routes
//!
//! Configures the Axum router for the joke service.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, index_handler, jokes_handler, submit_handler, types_handler, AppState,
};

/// Creates the joke service router.
///
/// # Endpoints
/// - `GET /joke` - Endpoint overview (HTML)
/// - `GET /joke/:type?count=N` - Random jokes of a type (`any` for all)
/// - `GET /types` - Type names from the store
/// - `POST /submit` - Add a joke of an existing type
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/joke", get(index_handler))
        .route("/joke/:type", get(jokes_handler))
        .route("/types", get(types_handler))
        .route("/submit", post(submit_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(Arc::new(MemoryStore::new())))
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/joke").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_jokes_endpoint_without_data() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/joke/any?count=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_submit_requires_post() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/submit").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
