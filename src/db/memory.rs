//! In-process store
//!
//! Behaves like the relational store (auto-increment ids, unique type names)
//! without a server. Can be switched offline to exercise failure paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{JokeStore, StoreError, StoreResult};
use crate::models::{Joke, JokeType};

#[derive(Debug, Default)]
struct Tables {
    types: Vec<JokeType>,
    jokes: Vec<(i64, String, String, i64)>,
    next_type_id: i64,
    next_joke_id: i64,
}

/// Store that keeps both tables in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type, returning the existing id when the name is taken.
    pub fn add_type(&self, name: impl Into<String>) -> i64 {
        let name = name.into();
        let mut tables = self.lock();
        if let Some(existing) = tables.types.iter().find(|t| t.name == name) {
            return existing.id;
        }
        tables.next_type_id += 1;
        let id = tables.next_type_id;
        tables.types.push(JokeType { id, name });
        id
    }

    /// Adds a joke under `type_name`, creating the type if needed.
    pub fn add_joke(
        &self,
        type_name: &str,
        setup: impl Into<String>,
        punchline: impl Into<String>,
    ) -> i64 {
        let type_id = self.add_type(type_name);
        let mut tables = self.lock();
        tables.next_joke_id += 1;
        let id = tables.next_joke_id;
        tables
            .jokes
            .push((id, setup.into(), punchline.into(), type_id));
        id
    }

    /// Makes every subsequent call fail as if the server were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of rows in the jokes table.
    pub fn joke_count(&self) -> usize {
        self.lock().jokes.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl JokeStore for MemoryStore {
    async fn all_jokes(&self) -> StoreResult<Vec<Joke>> {
        self.check_online()?;
        let tables = self.lock();
        let jokes = tables
            .jokes
            .iter()
            .filter_map(|(id, setup, punchline, type_id)| {
                tables
                    .types
                    .iter()
                    .find(|t| t.id == *type_id)
                    .map(|t| Joke::new(*id, setup.clone(), punchline.clone(), t.id, t.name.clone()))
            })
            .collect();
        Ok(jokes)
    }

    async fn type_names(&self) -> StoreResult<Vec<String>> {
        self.check_online()?;
        Ok(self.lock().types.iter().map(|t| t.name.clone()).collect())
    }

    async fn find_type_id(&self, type_name: &str) -> StoreResult<Option<i64>> {
        self.check_online()?;
        Ok(self
            .lock()
            .types
            .iter()
            .find(|t| t.name == type_name)
            .map(|t| t.id))
    }

    async fn insert_joke(&self, type_id: i64, setup: &str, punchline: &str) -> StoreResult<i64> {
        self.check_online()?;
        let mut tables = self.lock();
        if !tables.types.iter().any(|t| t.id == type_id) {
            return Err(StoreError::Query(sqlx::Error::RowNotFound));
        }
        tables.next_joke_id += 1;
        let id = tables.next_joke_id;
        tables
            .jokes
            .push((id, setup.to_string(), punchline.to_string(), type_id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_join_carries_type_name() {
        let store = MemoryStore::new();
        store.add_joke("pun", "A", "B");
        store.add_joke("programming", "C", "D");

        let jokes = store.all_jokes().await.unwrap();
        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[0], Joke::new(1, "A", "B", 1, "pun"));
        assert_eq!(jokes[1].type_name, "programming");
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let store = MemoryStore::new();
        let type_id = store.add_type("pun");

        let first = store.insert_joke(type_id, "A", "B").await.unwrap();
        let second = store.insert_joke(type_id, "C", "D").await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.joke_count(), 2);
    }

    #[tokio::test]
    async fn test_type_names_are_unique() {
        let store = MemoryStore::new();
        assert_eq!(store.add_type("pun"), store.add_type("pun"));
        assert_eq!(store.type_names().await.unwrap(), vec!["pun".to_string()]);
        assert_eq!(store.find_type_id("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_offline(true);

        assert!(matches!(store.all_jokes().await, Err(StoreError::Connection(_))));
        assert!(store.type_names().await.is_err());
        assert!(store.find_type_id("pun").await.is_err());
    }
}
