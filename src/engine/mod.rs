//! Round engine trait for game variants.
//!
//! Variants implement `RoundEngine` to define their rules:
//! - What happens when a round begins
//! - How an interaction is judged (pass/fail/ignore)
//! - When the game completes and what the final average is
//!
//! The session controller drives the engine and never interprets the
//! rules itself.

pub mod levels;
pub mod solo;

pub use levels::LevelRounds;
pub use solo::SoloRounds;

use crate::core::{GameConfig, GameRng};
use crate::io::{AudioSink, Renderer, StatusDisplay};
use crate::timing::Scheduler;

/// Outcome of feeding one event into an engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineStatus {
    /// The game continues.
    Running,
    /// A wrong interaction ended the game; state is frozen.
    Failed,
    /// All rounds were completed.
    Complete {
        /// Final average reaction time in milliseconds.
        average_ms: f64,
    },
}

impl EngineStatus {
    /// Whether this status ends the session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EngineStatus::Running)
    }
}

/// Everything an engine needs while handling one event.
///
/// Borrowed from the session for exactly one call; engines hold no
/// collaborator references of their own.
pub struct EngineContext<'a> {
    pub config: &'a GameConfig,
    pub rng: &'a mut GameRng,
    pub timers: &'a mut Scheduler,
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioSink,
    pub display: &'a mut dyn StatusDisplay,
}

/// Round engine trait.
///
/// ## Implementation Notes
///
/// - `on_interact` and `on_reveal` must ignore events that arrive outside
///   the state they are valid in (stale clicks, stale timers) - return
///   `Running` and change nothing.
/// - `begin` is called once per session, after the countdown completes.
/// - A `Failed` or `Complete` return freezes the engine until `reset`.
pub trait RoundEngine {
    /// The value identifying what the player interacted with.
    type Label: Copy + PartialEq + std::fmt::Debug;

    /// Return to the pre-game state, dropping all round progress.
    fn reset(&mut self);

    /// Start the first round.
    fn begin(&mut self, ctx: &mut EngineContext<'_>);

    /// Judge an interaction with a rendered item.
    fn on_interact(&mut self, label: Self::Label, ctx: &mut EngineContext<'_>) -> EngineStatus;

    /// The `Reveal` timer fired: show the next round or the delayed target.
    fn on_reveal(&mut self, ctx: &mut EngineContext<'_>) -> EngineStatus;

    /// Successful rounds so far (resets at level transitions where the
    /// variant has levels).
    fn round_index(&self) -> u32;

    /// Accumulated reaction time in milliseconds.
    fn total_elapsed_ms(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(!EngineStatus::Running.is_terminal());
        assert!(EngineStatus::Failed.is_terminal());
        assert!(EngineStatus::Complete { average_ms: 1.0 }.is_terminal());
    }
}
