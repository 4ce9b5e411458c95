//! Startup Cache Load
//!
//! Fills the joke cache from the store once. The server starts accepting
//! requests immediately; until the load lands, joke reads answer 503.

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::AppState;
use crate::cache::JokeCache;
use crate::db::JokeStore;

/// Loads every joke from the store into the cache.
///
/// Store failures are logged and leave the cache as it was. The store is
/// queried before the write lock is taken, so readers are only blocked
/// while rows are inserted.
///
/// # Returns
/// The number of jokes newly inserted.
pub async fn load_cache(cache: &RwLock<JokeCache>, store: &dyn JokeStore) -> usize {
    let jokes = match store.all_jokes().await {
        Ok(jokes) => jokes,
        Err(e) => {
            error!("Error loading jokes from the database: {}", e);
            return 0;
        }
    };

    let fetched = jokes.len();
    let inserted = cache.write().await.extend(jokes);
    info!("Loaded {} jokes into cache ({} fetched)", inserted, fetched);
    inserted
}

/// Spawns the one-shot cache load.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be aborted during
/// graceful shutdown.
pub fn spawn_cache_load(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        load_cache(&state.cache, state.store.as_ref()).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::Joke;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_load_fills_cache() {
        let store = MemoryStore::new();
        store.add_joke("pun", "A", "B");
        store.add_joke("general", "C", "D");
        let cache = RwLock::new(JokeCache::new());

        let inserted = load_cache(&cache, &store).await;

        assert_eq!(inserted, 2);
        assert_eq!(cache.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_existing_entries() {
        let store = MemoryStore::new();
        store.set_offline(true);
        let mut existing = JokeCache::new();
        existing.add(Joke::new(9, "A", "B", 1, "pun"));
        let cache = RwLock::new(existing);

        let inserted = load_cache(&cache, &store).await;

        assert_eq!(inserted, 0);
        assert_eq!(cache.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_load_skips_duplicates() {
        let store = MemoryStore::new();
        store.add_joke("pun", "A", "B");
        let cache = RwLock::new(JokeCache::new());

        load_cache(&cache, &store).await;
        let second = load_cache(&cache, &store).await;

        assert_eq!(second, 0);
        assert_eq!(cache.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_spawned_load_completes() {
        let store = Arc::new(MemoryStore::new());
        store.add_joke("pun", "A", "B");
        let state = AppState::new(store);

        spawn_cache_load(state.clone()).await.unwrap();

        assert_eq!(state.cache.read().await.len(), 1);
    }
}
