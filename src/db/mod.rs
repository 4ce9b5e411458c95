//! Store Module
//!
//! Access to the relational store holding `types` and `jokes`.
//!
//! Every query runs on its own connection: opened for the call, closed
//! before the call returns, on both the success and the failure path.

mod memory;
mod mysql;
pub mod schema;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Joke;

pub use memory::MemoryStore;
pub use mysql::{connect, release, MySqlStore};

// == Store Error ==
/// Failures surfaced by the store accessor.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required connection setting was not provided
    #[error("Missing database setting: {0}")]
    MissingConfig(&'static str),

    /// The store could not be reached
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// The store rejected or failed the query
    #[error("Database query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Convenience Result type for store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Joke Store ==
/// Parameterized queries the services need from the store.
#[async_trait]
pub trait JokeStore: Send + Sync {
    /// All jokes joined with their type names.
    async fn all_jokes(&self) -> StoreResult<Vec<Joke>>;

    /// Every known type name.
    async fn type_names(&self) -> StoreResult<Vec<String>>;

    /// Resolves a type name to its id, `None` when no such type exists.
    async fn find_type_id(&self, type_name: &str) -> StoreResult<Option<i64>>;

    /// Inserts a joke and returns its store-assigned id.
    async fn insert_joke(&self, type_id: i64, setup: &str, punchline: &str) -> StoreResult<i64>;
}
