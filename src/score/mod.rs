//! Score persistence: the local leaderboard.

pub mod leaderboard;

pub use leaderboard::{Leaderboard, LEADERBOARD_KEY};
