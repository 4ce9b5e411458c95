//! Bulk loader
//!
//! Rebuilds the `types` and `jokes` tables from a static JSON list of
//! `{type, setup, punchline}` records. Existing rows are cleared first.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use sqlx::mysql::MySqlConnection;
use thiserror::Error;
use tracing::{error, info, warn};

use super::schema::{
    COUNT_JOKES, COUNT_JOKES_BY_TYPE, COUNT_TYPES, CREATE_JOKES_TABLE, CREATE_TYPES_TABLE,
    DELETE_JOKES, DELETE_TYPES, INSERT_JOKE, INSERT_TYPE, SELECT_TYPES,
};
use crate::models::JokeType;

/// Inserted jokes between progress log lines
const PROGRESS_EVERY: usize = 100;

/// Failures that abort a seeding run.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One record of the seed file. Unknown fields (such as `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedJoke {
    #[serde(rename = "type")]
    pub joke_type: String,
    pub setup: String,
    pub punchline: String,
}

/// Outcome of inserting the joke rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub types_inserted: usize,
    pub jokes_inserted: usize,
    pub jokes_skipped: usize,
}

/// Row counts read back after seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub total_types: i64,
    pub total_jokes: i64,
    /// `(type_name, joke_count)`, most jokes first
    pub jokes_by_type: Vec<(String, i64)>,
}

/// Parses the seed file contents.
pub fn parse_seed_jokes(contents: &str) -> Result<Vec<SeedJoke>, SeedError> {
    Ok(serde_json::from_str(contents)?)
}

/// Reads and parses a seed file.
pub async fn read_seed_file(path: &Path) -> Result<Vec<SeedJoke>, SeedError> {
    info!("Reading jokes from {}", path.display());
    let contents = tokio::fs::read_to_string(path).await?;
    let jokes = parse_seed_jokes(&contents)?;
    info!("Loaded {} jokes from file", jokes.len());
    Ok(jokes)
}

/// Distinct type names in order of first appearance.
pub fn unique_types(jokes: &[SeedJoke]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for joke in jokes {
        if !types.contains(&joke.joke_type) {
            types.push(joke.joke_type.clone());
        }
    }
    types
}

/// Creates missing tables, clears both, then inserts types and jokes.
pub async fn populate(
    conn: &mut MySqlConnection,
    jokes: &[SeedJoke],
) -> Result<SeedReport, SeedError> {
    sqlx::query(CREATE_TYPES_TABLE).execute(&mut *conn).await?;
    sqlx::query(CREATE_JOKES_TABLE).execute(&mut *conn).await?;

    let types = unique_types(jokes);
    info!("Found {} unique joke types: {:?}", types.len(), types);

    // jokes reference types, so they go first
    sqlx::query(DELETE_JOKES).execute(&mut *conn).await?;
    sqlx::query(DELETE_TYPES).execute(&mut *conn).await?;
    info!("Cleared existing jokes and types");

    let mut report = SeedReport::default();
    for type_name in &types {
        match sqlx::query(INSERT_TYPE)
            .bind(type_name)
            .execute(&mut *conn)
            .await
        {
            Ok(_) => report.types_inserted += 1,
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                info!("Type '{}' already exists, skipping", type_name);
            }
            Err(e) => error!("Error inserting type '{}': {}", type_name, e),
        }
    }
    info!("Inserted {} types", report.types_inserted);

    let type_ids: HashMap<String, i64> = sqlx::query_as::<_, JokeType>(SELECT_TYPES)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|t| (t.name, t.id))
        .collect();

    for joke in jokes {
        let Some(type_id) = type_ids.get(&joke.joke_type) else {
            error!("Type '{}' not found in types table", joke.joke_type);
            report.jokes_skipped += 1;
            continue;
        };

        match sqlx::query(INSERT_JOKE)
            .bind(*type_id)
            .bind(&joke.setup)
            .bind(&joke.punchline)
            .execute(&mut *conn)
            .await
        {
            Ok(_) => {
                report.jokes_inserted += 1;
                if report.jokes_inserted % PROGRESS_EVERY == 0 {
                    info!("Inserted {} jokes...", report.jokes_inserted);
                }
            }
            Err(e) => {
                error!("Error inserting joke '{}': {}", joke.setup, e);
                report.jokes_skipped += 1;
            }
        }
    }

    info!("Inserted {} jokes", report.jokes_inserted);
    if report.jokes_skipped > 0 {
        warn!("{} jokes had errors and were skipped", report.jokes_skipped);
    }

    Ok(report)
}

/// Reads back row counts and logs them.
pub async fn verify(conn: &mut MySqlConnection) -> Result<PopulationStats, SeedError> {
    let total_types = sqlx::query_scalar::<_, i64>(COUNT_TYPES)
        .fetch_one(&mut *conn)
        .await?;
    let total_jokes = sqlx::query_scalar::<_, i64>(COUNT_JOKES)
        .fetch_one(&mut *conn)
        .await?;
    let jokes_by_type = sqlx::query_as::<_, (String, i64)>(COUNT_JOKES_BY_TYPE)
        .fetch_all(&mut *conn)
        .await?;

    info!("Total types: {}", total_types);
    info!("Total jokes: {}", total_jokes);
    for (type_name, count) in &jokes_by_type {
        info!("  {}: {} jokes", type_name, count);
    }

    Ok(PopulationStats {
        total_types,
        total_jokes,
        jokes_by_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_extra_fields() {
        let json = r#"[
            {"id": 1, "type": "general", "setup": "A", "punchline": "B"},
            {"id": 2, "type": "programming", "setup": "C", "punchline": "D"}
        ]"#;
        let jokes = parse_seed_jokes(json).unwrap();

        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[1].joke_type, "programming");
        assert_eq!(jokes[1].setup, "C");
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let json = r#"[{"type": "general", "setup": "A"}]"#;
        assert!(matches!(parse_seed_jokes(json), Err(SeedError::Parse(_))));
    }

    #[test]
    fn test_unique_types_keeps_first_seen_order() {
        let jokes: Vec<SeedJoke> = ["pun", "general", "pun", "knock-knock", "general"]
            .iter()
            .map(|t| SeedJoke {
                joke_type: t.to_string(),
                setup: "s".to_string(),
                punchline: "p".to_string(),
            })
            .collect();

        assert_eq!(unique_types(&jokes), vec!["pun", "general", "knock-knock"]);
    }

    #[test]
    fn test_sample_data_parses() {
        let jokes = parse_seed_jokes(include_str!("../../data/jokes.json")).unwrap();
        assert_eq!(jokes.len(), 6);
        assert_eq!(
            unique_types(&jokes),
            vec!["general", "programming", "knock-knock", "dad"]
        );
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let result = read_seed_file(Path::new("/nonexistent/jokes.json")).await;
        assert!(matches!(result, Err(SeedError::Io(_))));
    }
}
