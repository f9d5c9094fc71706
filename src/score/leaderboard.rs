//! Local leaderboard: the best N average reaction times.
//!
//! The sole persistent state in the system. Persisted as a JSON array of
//! finite numbers under a single key. Every failure mode - missing key,
//! malformed JSON, store error, junk score - degrades silently: the player
//! never sees a persistence error.

use log::{debug, warn};

use crate::io::KeyValueStore;

/// Storage key the score list lives under.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Ordered store of the best average scores (ascending, lower is better).
#[derive(Clone, Debug)]
pub struct Leaderboard {
    key: String,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Leaderboard {
    /// Create a leaderboard keeping the best `capacity` scores.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            key: LEADERBOARD_KEY.to_string(),
            capacity,
        }
    }

    /// Use a different storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Maximum number of scores kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load the persisted list, ascending.
    ///
    /// A missing key, a store error, or malformed JSON all read as empty.
    pub fn load(&self, store: &dyn KeyValueStore) -> Vec<f64> {
        let raw = match store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("leaderboard read failed, treating as empty: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<f64>>(&raw) {
            Ok(scores) => scores.into_iter().filter(|s| s.is_finite()).collect(),
            Err(err) => {
                warn!("leaderboard entry is corrupt, treating as empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Record a score: insert, sort ascending, truncate to capacity,
    /// persist.
    ///
    /// Returns the new list so the caller can re-render it, or `None` when
    /// the score was rejected (non-finite input is dropped silently).
    pub fn record(&self, store: &mut dyn KeyValueStore, score: f64) -> Option<Vec<f64>> {
        if !score.is_finite() {
            debug!("dropping non-finite score {:?}", score);
            return None;
        }

        let mut scores = self.load(store);
        scores.push(score);
        scores.sort_by(f64::total_cmp);
        scores.truncate(self.capacity);

        match serde_json::to_string(&scores) {
            Ok(json) => {
                if let Err(err) = store.set(&self.key, &json) {
                    warn!("leaderboard write failed, keeping in-memory list: {}", err);
                }
            }
            Err(err) => warn!("leaderboard encode failed: {}", err),
        }

        Some(scores)
    }
}
