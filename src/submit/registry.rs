//! Known joke types for the submission microservice
//!
//! Seeded once from the joke service, grown by `newType` submissions, and
//! held only in memory: never written back and never re-synchronized.

use tracing::{info, warn};

use crate::client::JokeClient;
use crate::models::Submission;

/// In-memory list of type names, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    names: Vec<String>,
}

impl TypeRegistry {
    pub fn new(names: Vec<String>) -> Self {
        let mut registry = Self::default();
        for name in names {
            registry.register(name);
        }
        registry
    }

    /// Fetches the joke service's types; an unreachable service yields an
    /// empty registry.
    pub async fn seed(client: &JokeClient) -> Self {
        match client.types().await {
            Ok(names) => {
                info!("Seeded {} joke types from joke service", names.len());
                Self::new(names)
            }
            Err(e) => {
                warn!("Could not fetch joke types, starting empty: {}", e);
                Self::default()
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Adds `name` if unknown. Returns true when it was added.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Picks the type a submission is filed under.
    ///
    /// A `newType` wins over `type` and is registered when unknown.
    pub fn resolve(&mut self, submission: &Submission) -> Option<String> {
        if let Some(new_type) = &submission.new_type {
            if self.register(new_type.clone()) {
                info!("Registered new joke type '{}'", new_type);
            }
            return Some(new_type.clone());
        }
        submission.joke_type.clone()
    }
}
