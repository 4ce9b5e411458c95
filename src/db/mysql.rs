//! MySQL-backed store accessor

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, warn};

use super::schema::{INSERT_JOKE, SELECT_ALL_JOKES, SELECT_TYPE_ID, SELECT_TYPE_NAMES};
use super::{JokeStore, StoreError, StoreResult};
use crate::config::DatabaseConfig;
use crate::models::Joke;

/// Opens a single connection with the given settings.
///
/// Host, user and database name are required; the password may be empty.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<MySqlConnection> {
    let host = config
        .host
        .as_deref()
        .ok_or(StoreError::MissingConfig("MYSQL_HOST"))?;
    let user = config
        .user
        .as_deref()
        .ok_or(StoreError::MissingConfig("MYSQL_USER"))?;
    let database = config
        .database
        .as_deref()
        .ok_or(StoreError::MissingConfig("MYSQL_DATABASE"))?;

    let mut options = MySqlConnectOptions::new()
        .host(host)
        .port(config.port)
        .username(user)
        .database(database);
    if let Some(password) = config.password.as_deref() {
        options = options.password(password);
    }

    let connection = options.connect().await.map_err(StoreError::Connection)?;
    debug!("Connected to the database");
    Ok(connection)
}

/// Closes a connection, logging rather than propagating close failures.
pub async fn release(connection: MySqlConnection) {
    if let Err(e) = connection.close().await {
        warn!("Failed to close database connection cleanly: {}", e);
    }
}

// == MySQL Store ==
/// Store accessor that connects per call; holds settings only, no connection.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    config: DatabaseConfig,
}

impl MySqlStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl JokeStore for MySqlStore {
    async fn all_jokes(&self) -> StoreResult<Vec<Joke>> {
        let mut conn = connect(&self.config).await?;
        let result = sqlx::query_as::<_, Joke>(SELECT_ALL_JOKES)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        result.map_err(StoreError::Query)
    }

    async fn type_names(&self) -> StoreResult<Vec<String>> {
        let mut conn = connect(&self.config).await?;
        let result = sqlx::query_scalar::<_, String>(SELECT_TYPE_NAMES)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        result.map_err(StoreError::Query)
    }

    async fn find_type_id(&self, type_name: &str) -> StoreResult<Option<i64>> {
        let mut conn = connect(&self.config).await?;
        let result = sqlx::query_scalar::<_, i64>(SELECT_TYPE_ID)
            .bind(type_name)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        result.map_err(StoreError::Query)
    }

    async fn insert_joke(&self, type_id: i64, setup: &str, punchline: &str) -> StoreResult<i64> {
        let mut conn = connect(&self.config).await?;
        let result = sqlx::query(INSERT_JOKE)
            .bind(type_id)
            .bind(setup)
            .bind(punchline)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let done = result.map_err(StoreError::Query)?;
        Ok(done.last_insert_id() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_host_fails_at_first_use() {
        let store = MySqlStore::new(DatabaseConfig::default());

        let result = store.all_jokes().await;
        assert!(matches!(result, Err(StoreError::MissingConfig("MYSQL_HOST"))));
    }

    #[tokio::test]
    async fn test_missing_database_name_is_reported() {
        let config = DatabaseConfig {
            host: Some("localhost".to_string()),
            user: Some("jokes".to_string()),
            port: 3306,
            ..DatabaseConfig::default()
        };

        let result = connect(&config).await;
        assert!(matches!(result, Err(StoreError::MissingConfig("MYSQL_DATABASE"))));
    }
}
