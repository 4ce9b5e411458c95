//! Selection Module
//!
//! Answers "give me N jokes of type T" without touching the store.
//!
//! Draws are made **with replacement**: each of the `count` picks is an
//! independent uniform choice over the matching jokes, so one response may
//! repeat a joke. Asking for more jokes than exist of a type still returns
//! `count` jokes. Clients rely on this, so it must not become sampling
//! without replacement.

use rand::Rng;

use crate::models::Joke;

/// Type filter value that matches every joke
pub const ANY_TYPE: &str = "any";

/// True when `joke` passes the type filter.
///
/// Matching is exact and case-sensitive; [`ANY_TYPE`] matches everything.
pub fn matches_type(joke: &Joke, joke_type: &str) -> bool {
    joke_type == ANY_TYPE || joke.type_name == joke_type
}

/// Selects `count` jokes of `joke_type` from `jokes`.
///
/// - no jokes, or none of the requested type: empty result
/// - `count <= 0`: empty result
/// - `count` above `max_count`: clamped down to `max_count`
///
/// Never fails; the caller decides what an empty result means.
pub fn select_jokes<'a, I, R>(
    jokes: I,
    joke_type: &str,
    count: i64,
    max_count: usize,
    rng: &mut R,
) -> Vec<Joke>
where
    I: IntoIterator<Item = &'a Joke>,
    R: Rng,
{
    if count <= 0 {
        return Vec::new();
    }

    let pool: Vec<&Joke> = jokes
        .into_iter()
        .filter(|joke| matches_type(joke, joke_type))
        .collect();
    if pool.is_empty() {
        return Vec::new();
    }

    let count = usize::try_from(count).unwrap_or(usize::MAX).min(max_count);

    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn jokes() -> Vec<Joke> {
        vec![
            Joke::new(1, "A", "B", 1, "pun"),
            Joke::new(2, "C", "D", 2, "programming"),
            Joke::new(3, "E", "F", 2, "programming"),
        ]
    }

    #[test]
    fn test_single_joke_repeats() {
        let pool = vec![Joke::new(1, "A", "B", 1, "pun")];
        let mut rng = StdRng::seed_from_u64(1);

        let selected = select_jokes(&pool, "pun", 5, 100, &mut rng);
        assert_eq!(selected.len(), 5);
        assert!(selected.iter().all(|j| *j == pool[0]));
    }

    #[test]
    fn test_any_matches_every_type() {
        let pool = jokes();
        assert!(pool.iter().all(|j| matches_type(j, ANY_TYPE)));
    }

    #[test]
    fn test_type_match_is_exact() {
        let joke = Joke::new(1, "A", "B", 1, "programming");
        assert!(matches_type(&joke, "programming"));
        assert!(!matches_type(&joke, "Programming"));
        assert!(!matches_type(&joke, "program"));
    }

    #[test]
    fn test_unknown_type_is_empty() {
        let pool = jokes();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_jokes(&pool, "knock-knock", 3, 100, &mut rng).is_empty());
    }

    #[test]
    fn test_non_positive_count_is_empty() {
        let pool = jokes();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_jokes(&pool, "any", 0, 100, &mut rng).is_empty());
        assert!(select_jokes(&pool, "any", -4, 100, &mut rng).is_empty());
    }

    #[test]
    fn test_count_clamped_to_ceiling() {
        let pool = jokes();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_jokes(&pool, "any", 1_000_000, 100, &mut rng).len(), 100);
    }

    #[test]
    fn test_every_matching_joke_is_reachable() {
        let pool = jokes();
        let mut rng = StdRng::seed_from_u64(42);

        let selected = select_jokes(&pool, "programming", 100, 100, &mut rng);
        assert!(selected.iter().any(|j| j.id == 2));
        assert!(selected.iter().any(|j| j.id == 3));
    }
}
