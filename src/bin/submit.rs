//! Submission microservice
//!
//! Accepts joke submissions against a type list fetched once from the joke
//! service at startup.

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;

use joke_service::client::JokeClient;
use joke_service::logging::init_tracing;
use joke_service::submit::{create_submit_router, TypeRegistry};
use joke_service::{SubmitConfig, SubmitState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("joke_service=info,submit=info,tower_http=info");

    let config = SubmitConfig::from_env();
    info!(
        "Starting submission service: port={}, jokes_url={}",
        config.server_port, config.jokes_url
    );

    let client = JokeClient::new(&config.jokes_url)?;
    let types = TypeRegistry::seed(&client).await;
    let app = create_submit_router(SubmitState::new(types));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Submit app running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, initiating shutdown...");
            }
        })
        .await?;

    Ok(())
}
