//! Deterministic random number generation for round setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence, so whole
//!   game sessions replay exactly in tests
//! - **Bounded**: Delay and position draws are clamped to their configured
//!   ranges and degrade instead of panicking
//! - **Subset sampling**: Target/distractor selection never repeats an item
//!   and tolerates over-asking

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::ArenaBounds;

/// A point inside the arena, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Deterministic RNG for target selection, delays, and placement.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the host's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose `count` distinct items from `pool`, uniformly without
    /// replacement.
    ///
    /// Asking for more items than the pool holds returns the whole pool
    /// (in random order) rather than failing.
    pub fn choose_distinct<T: Clone>(&mut self, pool: &[T], count: usize) -> Vec<T> {
        let take = count.min(pool.len());
        rand::seq::index::sample(&mut self.inner, pool.len(), take)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect()
    }

    /// Draw a delay uniformly from `[min_ms, max_ms)`.
    ///
    /// A degenerate range (`min >= max`) collapses to `min_ms`.
    pub fn delay_between(&mut self, min_ms: u64, max_ms: u64) -> u64 {
        if min_ms >= max_ms {
            return min_ms;
        }
        self.inner.gen_range(min_ms..max_ms)
    }

    /// Place an item of `item_size` so its bounding box lies fully inside
    /// `bounds`.
    ///
    /// Items larger than the arena pin to the origin on that axis.
    pub fn position(&mut self, bounds: ArenaBounds, item_size: f64) -> Point {
        Point {
            x: self.coordinate(bounds.width, item_size),
            y: self.coordinate(bounds.height, item_size),
        }
    }

    fn coordinate(&mut self, extent: f64, item_size: f64) -> f64 {
        let max = extent - item_size;
        if max <= 0.0 {
            return 0.0;
        }
        self.inner.gen_range(0.0..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.delay_between(0, 1000), rng2.delay_between(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.delay_between(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.delay_between(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose_distinct_no_repeats() {
        let mut rng = GameRng::new(42);
        let pool: Vec<u32> = (0..15).collect();

        let picked = rng.choose_distinct(&pool, 7);
        assert_eq!(picked.len(), 7);

        let unique: std::collections::HashSet<_> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 7);
    }

    #[test]
    fn test_choose_distinct_over_ask_returns_whole_pool() {
        let mut rng = GameRng::new(42);
        let pool = vec![1, 2, 3];

        let picked = rng.choose_distinct(&pool, 10);
        assert_eq!(picked.len(), 3);

        let mut sorted = picked.clone();
        sorted.sort();
        assert_eq!(sorted, pool);
    }

    #[test]
    fn test_choose_distinct_empty_pool() {
        let mut rng = GameRng::new(42);
        let pool: Vec<u32> = vec![];
        assert!(rng.choose_distinct(&pool, 3).is_empty());
    }

    #[test]
    fn test_delay_between_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let d = rng.delay_between(300, 1300);
            assert!((300..1300).contains(&d));
        }
    }

    #[test]
    fn test_delay_between_degenerate_range() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.delay_between(1500, 1500), 1500);
        assert_eq!(rng.delay_between(2000, 100), 2000);
    }

    #[test]
    fn test_position_fits_bounds() {
        let mut rng = GameRng::new(9);
        let bounds = ArenaBounds::new(640.0, 400.0);

        for _ in 0..1000 {
            let p = rng.position(bounds, 50.0);
            assert!(p.x >= 0.0 && p.x + 50.0 <= 640.0);
            assert!(p.y >= 0.0 && p.y + 50.0 <= 400.0);
        }
    }

    #[test]
    fn test_position_oversized_item_pins_to_origin() {
        let mut rng = GameRng::new(9);
        let bounds = ArenaBounds::new(40.0, 400.0);

        let p = rng.position(bounds, 50.0);
        assert_eq!(p.x, 0.0);
        assert!(p.y >= 0.0);
    }
}
