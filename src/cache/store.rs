//! Joke Cache Module
//!
//! Append-only set of jokes keyed by id. Bulk-filled once at startup and
//! extended by successful submissions; entries are never edited or removed.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use rand::Rng;

use crate::cache::select_jokes;
use crate::models::Joke;

// == Joke Cache ==
/// Query-free snapshot of jokes for read-heavy serving.
#[derive(Debug, Clone, Default)]
pub struct JokeCache {
    /// Jokes by id, so iteration order is stable
    jokes: BTreeMap<i64, Joke>,
}

impl JokeCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts a joke unless one with the same id is already cached.
    ///
    /// Returns true when the joke was inserted.
    pub fn add(&mut self, joke: Joke) -> bool {
        match self.jokes.entry(joke.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(joke);
                true
            }
        }
    }

    // == Extend ==
    /// Inserts every joke, skipping ids already present.
    ///
    /// Returns the number of jokes actually inserted.
    pub fn extend(&mut self, jokes: impl IntoIterator<Item = Joke>) -> usize {
        let mut inserted = 0;
        for joke in jokes {
            if self.add(joke) {
                inserted += 1;
            }
        }
        inserted
    }

    // == Select ==
    /// Draws `count` jokes of `joke_type` with replacement.
    ///
    /// See [`select_jokes`] for the exact policy.
    pub fn select<R: Rng>(
        &self,
        joke_type: &str,
        count: i64,
        max_count: usize,
        rng: &mut R,
    ) -> Vec<Joke> {
        select_jokes(self.jokes.values(), joke_type, count, max_count, rng)
    }

    // == Lookup ==
    /// Returns the cached joke with this id, if any.
    pub fn get(&self, id: i64) -> Option<&Joke> {
        self.jokes.get(&id)
    }

    /// Iterates jokes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Joke> {
        self.jokes.values()
    }

    // == Length ==
    /// Returns the current number of cached jokes.
    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    // == Is Empty ==
    /// Returns true if no jokes are cached.
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }
}
