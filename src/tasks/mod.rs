//! Background Tasks Module
//!
//! Tasks spawned alongside the HTTP server.
//!
//! # Tasks
//! - Cache load: fills the joke cache from the store once at startup

mod loader;

pub use loader::{load_cache, spawn_cache_load};
