//! Joke and joke type records
//!
//! Value records shared by the store, the cache, and the HTTP surface.

use serde::{Deserialize, Serialize};

/// A joke category as stored in the `types` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JokeType {
    /// Store-assigned identifier
    pub id: i64,
    /// Unique type name (e.g. "programming")
    #[sqlx(rename = "type_name")]
    pub name: String,
}

/// A joke with its type name denormalized alongside the type id.
///
/// Once created a joke is never edited; the cache holds clones of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Joke {
    /// Store-assigned identifier
    pub id: i64,
    pub setup: String,
    pub punchline: String,
    /// References `types.id`
    pub type_id: i64,
    /// Name of the referenced type
    pub type_name: String,
}

impl Joke {
    /// Builds a joke record from its parts.
    pub fn new(
        id: i64,
        setup: impl Into<String>,
        punchline: impl Into<String>,
        type_id: i64,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            setup: setup.into(),
            punchline: punchline.into(),
            type_id,
            type_name: type_name.into(),
        }
    }
}
