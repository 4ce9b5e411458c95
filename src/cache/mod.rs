//! Cache Module
//!
//! In-memory mirror of the joke table and the selection logic served from it.

mod selection;
mod store;


// Re-export public types
pub use selection::{matches_type, select_jokes, ANY_TYPE};
pub use store::JokeCache;
