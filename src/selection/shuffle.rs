//! Sliding-window "no recent repeats" shuffle.
//!
//! This is not a permutation shuffle. Each pick is uniform over the items whose
//! key is not in the bounded history, so no key repeats within one window length.

use std::collections::VecDeque;

use {
    rand::{Rng, SeedableRng, rngs::StdRng, thread_rng},
    tracing::debug,
};

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Thread-local OS-seeded generator for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        thread_rng().r#gen::<f64>()
    }
}

/// Deterministic generator for reproducible sequences.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Bounded FIFO of recently picked keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleHistory<K> {
    keys: VecDeque<K>,
    window: usize,
}

impl<K: PartialEq> ShuffleHistory<K> {
    /// Creates an empty history holding at most `window` keys.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    /// Computes the effective window for a pool: `min(configured, pool_len - 1)`.
    #[must_use]
    pub fn window_for(pool_len: usize, configured: usize) -> usize {
        configured.min(pool_len.saturating_sub(1))
    }

    /// Gets the configured window size.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Checks whether `key` was picked within the window.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Records a pick, evicting the oldest keys beyond the window.
    pub fn push(&mut self, key: K) {
        self.keys.push_back(key);
        while self.keys.len() > self.window {
            self.keys.pop_front();
        }
    }

    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Gets the number of remembered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Checks if nothing has been picked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Forgets all picks.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Picks uniformly among `pool`, avoiding recently picked keys.
///
/// When the history covers the whole pool the full pool is used instead, so a
/// pick is always made for a non-empty pool.
///
/// # Arguments
///
/// * `pool` - Items to pick from
/// * `history` - Recent picks; the chosen key is appended
/// * `key` - Extracts the key from an item
/// * `random` - Source of uniform values
///
/// # Returns
///
/// The picked item, or `None` if `pool` is empty.
pub fn pick_diverse<'a, T, K, F, R>(
    pool: &'a [T],
    history: &mut ShuffleHistory<K>,
    key: F,
    random: &mut R,
) -> Option<&'a T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
    R: RandomSource + ?Sized,
{
    if pool.is_empty() {
        return None;
    }

    let mut candidates: Vec<&T> = pool
        .iter()
        .filter(|&item| !history.contains(&key(item)))
        .collect();
    if candidates.is_empty() {
        debug!(
            "Shuffle: History covers all {} items, falling back to full pool",
            pool.len()
        );
        candidates = pool.iter().collect();
    }

    let picked = candidates[uniform_index(random.next_f64(), candidates.len())];
    history.push(key(picked));
    Some(picked)
}

/// Maps a value in `[0, 1)` to an index below `len`.
fn uniform_index(value: f64, len: usize) -> usize {
    let value = if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    };
    // Truncation is the floor for non-negative values.
    ((value * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::selection::shuffle::{
        RandomSource, SeededRandom, ShuffleHistory, ThreadRandom, pick_diverse, uniform_index,
    };

    /// Replays a fixed list of values.
    struct ScriptedRandom {
        values: Vec<f64>,
        position: usize,
    }

    impl RandomSource for ScriptedRandom {
        fn next_f64(&mut self) -> f64 {
            let value = self.values[self.position % self.values.len()];
            self.position += 1;
            value
        }
    }

    #[test]
    fn test_history_is_bounded_fifo() {
        let mut history = ShuffleHistory::new(2);
        history.push(1);
        history.push(2);
        history.push(3);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert!(!history.contains(&1));
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_window_for_pool() {
        assert_eq!(ShuffleHistory::<u64>::window_for(10, 20), 9);
        assert_eq!(ShuffleHistory::<u64>::window_for(10, 3), 3);
        assert_eq!(ShuffleHistory::<u64>::window_for(0, 3), 0);
    }

    #[test]
    fn test_uniform_index_bounds() {
        assert_eq!(uniform_index(0.0, 4), 0);
        assert_eq!(uniform_index(0.999_999, 4), 3);
        assert_eq!(uniform_index(1.0, 4), 3);
        assert_eq!(uniform_index(f64::NAN, 4), 0);
    }

    #[test]
    fn test_empty_pool() {
        let pool: Vec<u64> = vec![];
        let mut history = ShuffleHistory::new(3);
        assert!(pick_diverse(&pool, &mut history, |v| *v, &mut ThreadRandom).is_none());
    }

    #[test]
    fn test_scripted_sequence_skips_history() {
        let pool = vec![1_u64, 2, 3, 4];
        let mut history = ShuffleHistory::new(2);
        let mut random = ScriptedRandom {
            values: vec![0.0],
            position: 0,
        };

        // Always the first candidate: 1, then 2 (1 excluded), then 3 (1 and 2 excluded),
        // then 1 again once it has been evicted.
        let picks: Vec<u64> = (0..4)
            .filter_map(|_| pick_diverse(&pool, &mut history, |v| *v, &mut random).copied())
            .collect();
        assert_eq!(picks, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_falls_back_to_full_pool() {
        let pool = vec![7_u64, 8];
        let mut history = ShuffleHistory::new(5);
        history.push(7);
        history.push(8);
        let mut random = SeededRandom::new(1);

        let picked = pick_diverse(&pool, &mut history, |v| *v, &mut random);
        assert!(picked.is_some());
    }

    #[test]
    fn test_no_immediate_repeat() {
        for n in 2..8_u64 {
            let pool: Vec<u64> = (0..n).collect();
            let window = ShuffleHistory::<u64>::window_for(pool.len(), 1);
            let mut history = ShuffleHistory::new(window);
            let mut random = SeededRandom::new(n);

            let mut previous = None;
            for _ in 0..200 {
                let picked = *pick_diverse(&pool, &mut history, |v| *v, &mut random).unwrap();
                assert_ne!(Some(picked), previous);
                previous = Some(picked);
            }
        }
    }

    #[test]
    fn test_window_length_runs_are_distinct() {
        let pool: Vec<u64> = (0..12).collect();
        let window = 5;
        let mut history = ShuffleHistory::new(window);
        let mut random = SeededRandom::new(42);

        let picks: Vec<u64> = (0..300)
            .map(|_| *pick_diverse(&pool, &mut history, |v| *v, &mut random).unwrap())
            .collect();

        for run in picks.windows(window) {
            let distinct: HashSet<u64> = run.iter().copied().collect();
            assert_eq!(distinct.len(), window);
        }
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let pool: Vec<u64> = (0..20).collect();
        let run = |seed| {
            let mut history = ShuffleHistory::new(10);
            let mut random = SeededRandom::new(seed);
            (0..30)
                .map(|_| *pick_diverse(&pool, &mut history, |v| *v, &mut random).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }
}
