//! Bulk loader
//!
//! Clears and repopulates the `types` and `jokes` tables from a JSON file.
//!
//! Usage: `seed [path/to/jokes.json]` (default `jokes.json`), with the
//! `MYSQL_*` variables pointing at the target database.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};

use joke_service::config::DatabaseConfig;
use joke_service::db::{connect, release, seed};
use joke_service::logging::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("joke_service=info,seed=info");

    if let Err(e) = run().await {
        error!("Database population failed: {:#}", e);
        std::process::exit(1);
    }
    info!("Database population completed successfully");
}

async fn run() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("jokes.json"));

    let jokes = seed::read_seed_file(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    let mut conn = connect(&DatabaseConfig::from_env())
        .await
        .context("connecting to the database")?;

    let outcome = async {
        seed::populate(&mut conn, &jokes).await?;
        seed::verify(&mut conn).await
    }
    .await;

    release(conn).await;
    info!("Database connection closed");

    outcome?;
    Ok(())
}
