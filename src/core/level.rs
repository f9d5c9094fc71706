//! Level definitions for the multi-target variant.
//!
//! A level bundles the item counts for each round at that stage. Levels are
//! immutable configuration defined at startup; the engine advances through
//! them by index and never mutates them.

use serde::{Deserialize, Serialize};

/// Configuration for one difficulty stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Human-readable name ("Level 1").
    pub name: String,

    /// Delay scale in milliseconds. Carried as data for hosts; the round
    /// logic itself does not read it.
    pub difficulty_ms: u64,

    /// Number of valid targets shown per round.
    pub target_count: usize,

    /// Number of distractors shown per round (best effort when the pool
    /// runs short).
    pub distractor_count: usize,
}

impl Level {
    /// Create a level.
    pub fn new(
        name: impl Into<String>,
        difficulty_ms: u64,
        target_count: usize,
        distractor_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            difficulty_ms,
            target_count,
            distractor_count,
        }
    }

    /// The standard five-level progression.
    #[must_use]
    pub fn default_set() -> Vec<Level> {
        vec![
            Level::new("Level 1", 1000, 1, 1),
            Level::new("Level 2", 800, 2, 2),
            Level::new("Level 3", 700, 2, 3),
            Level::new("Level 4", 600, 2, 4),
            Level::new("Level 5", 500, 3, 4),
        ]
    }
}
