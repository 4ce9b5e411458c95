//! Joke service
//!
//! Serves jokes by type from an in-memory cache filled from MySQL at startup.

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};

use joke_service::api::create_router;
use joke_service::logging::init_tracing;
use joke_service::{spawn_cache_load, AppState, Config};

/// Main entry point for the joke service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Spawn the one-shot cache load
/// 4. Serve HTTP on the configured port until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("joke_service=info,jokes=info,tower_http=info");

    info!("Starting joke service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, max_count={}, database={:?}@{:?}",
        config.server_port, config.max_count, config.database.database, config.database.host
    );

    let state = AppState::from_config(&config);
    let load_handle = spawn_cache_load(state.clone());
    info!("Cache load started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(load_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// Aborts the cache load if it is still running.
async fn shutdown_signal(load_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if !load_handle.is_finished() {
        load_handle.abort();
        warn!("Cache load aborted");
    }
}
