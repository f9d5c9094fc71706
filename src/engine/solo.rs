//! Single-target timed-delay rounds.
//!
//! One box appears after a random, difficulty-scaled delay; clicking it
//! hides it and schedules the next appearance. There is no failure state:
//! clicks while the box is hidden are ignored. After the configured number
//! of rounds the game completes with the (historically `total / 5`) average.

use log::{debug, info};

use super::{EngineContext, EngineStatus, RoundEngine};
use crate::core::{BoxTarget, SoloConfig};
use crate::io::Sprite;
use crate::timing::TimerKind;

#[derive(Clone, Copy, Debug)]
enum Phase {
    /// No session in progress.
    Idle,
    /// Delay elapsed; the box is hidden and the reveal timer is armed.
    Waiting,
    /// The box is on screen and the clock is running.
    Visible { appeared_at: u64 },
    /// All rounds played; frozen until reset.
    Complete,
}

/// The single-box variant's round engine.
#[derive(Debug)]
pub struct SoloRounds {
    solo: SoloConfig,
    round_index: u32,
    total_elapsed_ms: u64,
    phase: Phase,
}

impl Default for SoloRounds {
    fn default() -> Self {
        Self::new(SoloConfig::default())
    }
}

impl SoloRounds {
    /// Create an engine with the given solo configuration.
    #[must_use]
    pub fn new(solo: SoloConfig) -> Self {
        Self {
            solo,
            round_index: 0,
            total_elapsed_ms: 0,
            phase: Phase::Idle,
        }
    }

    /// The solo configuration in effect.
    #[must_use]
    pub fn solo_config(&self) -> &SoloConfig {
        &self.solo
    }

    /// Move the difficulty selector. Takes effect when the next delay is
    /// scheduled; an already-armed reveal keeps its drawn delay.
    pub fn set_difficulty(&mut self, difficulty: crate::core::Difficulty) {
        self.solo.difficulty = difficulty;
    }

    /// Whether the box is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    /// Whether all rounds have been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete)
    }

    /// Arm the reveal timer with a fresh difficulty-scaled delay.
    ///
    /// The difficulty is read here, each time, so a host can change the
    /// selector mid-game and the next round picks it up.
    fn schedule_next(&mut self, ctx: &mut EngineContext<'_>) {
        let (min_ms, max_ms) = self.solo.difficulty.delay_range_ms();
        let delay = ctx.rng.delay_between(min_ms, max_ms);
        debug!("next box in {}ms ({:?})", delay, self.solo.difficulty);
        ctx.timers.schedule(TimerKind::Reveal, delay);
        self.phase = Phase::Waiting;
    }
}

impl RoundEngine for SoloRounds {
    type Label = BoxTarget;

    fn reset(&mut self) {
        self.round_index = 0;
        self.total_elapsed_ms = 0;
        self.phase = Phase::Idle;
    }

    fn begin(&mut self, ctx: &mut EngineContext<'_>) {
        ctx.display.set_score("Round 1");
        self.schedule_next(ctx);
    }

    fn on_interact(&mut self, _label: BoxTarget, ctx: &mut EngineContext<'_>) -> EngineStatus {
        let Phase::Visible { appeared_at } = self.phase else {
            debug!("ignoring click while the box is hidden");
            return EngineStatus::Running;
        };

        let reaction_ms = ctx.timers.now() - appeared_at;
        ctx.audio.play_success();
        ctx.renderer.clear();
        self.total_elapsed_ms += reaction_ms;
        self.round_index += 1;
        ctx.display
            .set_score(&format!("Round {} | {} ms", self.round_index, reaction_ms));

        if self.round_index >= self.solo.total_rounds {
            self.phase = Phase::Complete;
            let average_ms =
                self.total_elapsed_ms as f64 / f64::from(self.solo.score_divisor_rounds);
            info!(
                "solo game complete: average {:.2}ms over {} rounds (divisor {})",
                average_ms, self.solo.total_rounds, self.solo.score_divisor_rounds
            );
            return EngineStatus::Complete { average_ms };
        }

        self.schedule_next(ctx);
        EngineStatus::Running
    }

    fn on_reveal(&mut self, ctx: &mut EngineContext<'_>) -> EngineStatus {
        match self.phase {
            Phase::Waiting => {
                let at = ctx.rng.position(ctx.config.arena, ctx.config.item_size);
                ctx.renderer.render(&[Sprite::new(BoxTarget, at.x, at.y)]);
                self.phase = Phase::Visible {
                    appeared_at: ctx.timers.now(),
                };
                EngineStatus::Running
            }
            _ => {
                debug!("ignoring stale reveal timer");
                EngineStatus::Running
            }
        }
    }

    fn round_index(&self) -> u32 {
        self.round_index
    }

    fn total_elapsed_ms(&self) -> u64 {
        self.total_elapsed_ms
    }
}
