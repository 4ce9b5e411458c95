//! API Handlers
//!
//! HTTP request handlers for the joke service endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{debug, info};

use crate::cache::JokeCache;
use crate::config::{Config, DEFAULT_MAX_COUNT};
use crate::db::{JokeStore, MySqlStore};
use crate::error::{JokeError, Result};
use crate::models::{HealthResponse, Joke, JokeQuery, SubmitJokeRequest};

/// Static description served at GET /joke
pub const INDEX_HTML: &str = "<h1>Joke API</h1><p>Available endpoints:</p><ul>\
<li>GET /joke/:type?count=x</li><li>GET /types</li><li>POST /submit</li></ul>";

/// Application state shared across all handlers.
///
/// The cache sits behind Arc<RwLock<>>; the store is any [`JokeStore`],
/// so tests can swap in an in-memory one.
#[derive(Clone)]
pub struct AppState {
    /// Append-only joke cache
    pub cache: Arc<RwLock<JokeCache>>,
    /// Store accessor used for types and submissions
    pub store: Arc<dyn JokeStore>,
    /// Ceiling on jokes per request
    pub max_count: usize,
}

impl AppState {
    /// Creates a new AppState with an empty cache.
    pub fn new(store: Arc<dyn JokeStore>) -> Self {
        Self::with_cache(store, JokeCache::new())
    }

    /// Creates a new AppState around an already filled cache.
    pub fn with_cache(store: Arc<dyn JokeStore>, cache: JokeCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            store,
            max_count: DEFAULT_MAX_COUNT,
        }
    }

    /// Overrides the per-request ceiling.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Creates a new AppState backed by MySQL.
    pub fn from_config(config: &Config) -> Self {
        let store = MySqlStore::new(config.database.clone());
        Self::new(Arc::new(store)).with_max_count(config.max_count)
    }
}

/// Handler for GET /joke
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for GET /joke/:type?count=N
///
/// Serves from the cache only. An empty cache is a 503; a type with no
/// matches is an empty 200.
pub async fn jokes_handler(
    State(state): State<AppState>,
    Path(joke_type): Path<String>,
    Query(query): Query<JokeQuery>,
) -> Result<Json<Vec<Joke>>> {
    let cache = state.cache.read().await;
    if cache.is_empty() {
        return Err(JokeError::NoJokes);
    }

    let count = query.count();
    let jokes = cache.select(&joke_type, count, state.max_count, &mut rand::thread_rng());
    debug!(
        "Selected {} jokes for type '{}' (requested {})",
        jokes.len(),
        joke_type,
        count
    );

    Ok(Json(jokes))
}

/// Handler for GET /types
///
/// Reads type names straight from the store.
pub async fn types_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let types = state.store.type_names().await?;
    Ok(Json(types))
}

/// Handler for POST /submit
///
/// Validates, resolves the type, inserts, then adds the new joke to the
/// cache. Nothing is cached unless the insert succeeded. Types are never
/// created here.
pub async fn submit_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitJokeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Joke>)> {
    let Json(req) = payload.map_err(|e| JokeError::InvalidRequest(e.body_text()))?;
    let new_joke = req.validate().map_err(JokeError::InvalidRequest)?;

    let type_id = state
        .store
        .find_type_id(&new_joke.type_name)
        .await?
        .ok_or_else(|| JokeError::UnknownType(new_joke.type_name.clone()))?;

    let id = state
        .store
        .insert_joke(type_id, &new_joke.setup, &new_joke.punchline)
        .await?;

    let joke = Joke::new(
        id,
        new_joke.setup,
        new_joke.punchline,
        type_id,
        new_joke.type_name,
    );
    state.cache.write().await.add(joke.clone());
    info!("Added joke {} of type '{}'", joke.id, joke.type_name);

    Ok((StatusCode::CREATED, Json(joke)))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cached = state.cache.read().await.len();
    Json(HealthResponse::healthy().with_cached_jokes(cached))
}
