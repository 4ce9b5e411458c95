//! Joke Service - jokes by type, served from an in-memory cache
//!
//! A joke service backed by MySQL, a submission microservice with an
//! in-memory type list, a bulk loader, and a terminal client.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod submit;
pub mod tasks;

pub use api::AppState;
pub use config::{Config, SubmitConfig};
pub use submit::SubmitState;
pub use tasks::spawn_cache_load;
