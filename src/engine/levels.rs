//! Multi-target level rounds.
//!
//! Each round shows a handful of targets and distractors drawn from the
//! color-shape pool. Clicking any target ends the round successfully, even
//! with distractors still on screen; clicking a distractor ends the game.
//! Five successes advance the level, and finishing the last level completes
//! the game with the average reaction time over every round played.

use log::{debug, info};
use smallvec::SmallVec;

use super::{EngineContext, EngineStatus, RoundEngine};
use crate::core::{Level, ShapeLabel};
use crate::io::Sprite;
use crate::timing::TimerKind;

/// Active targets per round never exceed the hardest level's count, so the
/// set stays inline.
type TargetSet = SmallVec<[ShapeLabel; 4]>;

#[derive(Debug)]
enum Phase {
    /// No session in progress.
    Idle,
    /// Between rounds; the reveal timer is armed.
    Ready,
    /// Items are on screen and the clock is running.
    Active { targets: TargetSet, appeared_at: u64 },
    /// A distractor was clicked; frozen until reset.
    Failed,
    /// Every level was cleared; frozen until reset.
    Complete,
}

/// The multi-target variant's round engine.
#[derive(Debug)]
pub struct LevelRounds {
    levels: Vec<Level>,
    pool: Vec<ShapeLabel>,
    level_index: usize,
    round_index: u32,
    total_elapsed_ms: u64,
    phase: Phase,
}

impl Default for LevelRounds {
    fn default() -> Self {
        Self::new(Level::default_set())
    }
}

impl LevelRounds {
    /// Create an engine over the given level sequence.
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Self {
        assert!(!levels.is_empty(), "at least one level is required");
        Self {
            levels,
            pool: ShapeLabel::all(),
            level_index: 0,
            round_index: 0,
            total_elapsed_ms: 0,
            phase: Phase::Idle,
        }
    }

    /// The level currently being played.
    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// The configured level sequence.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Labels that count as a hit right now. Empty outside an active round.
    #[must_use]
    pub fn current_targets(&self) -> &[ShapeLabel] {
        match &self.phase {
            Phase::Active { targets, .. } => targets,
            _ => &[],
        }
    }

    /// Whether a round is on screen awaiting interaction.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// Whether a wrong click ended the game.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed)
    }

    fn show_round(&mut self, ctx: &mut EngineContext<'_>) {
        let level = &self.levels[self.level_index];

        let targets: TargetSet = ctx
            .rng
            .choose_distinct(&self.pool, level.target_count)
            .into_iter()
            .collect();

        // Distractors come from the remaining pool; when it runs short the
        // round simply shows fewer of them.
        let rest: Vec<ShapeLabel> = self
            .pool
            .iter()
            .copied()
            .filter(|label| !targets.contains(label))
            .collect();
        let distractors = ctx.rng.choose_distinct(&rest, level.distractor_count);

        let mut sprites = Vec::with_capacity(targets.len() + distractors.len());
        for label in targets.iter().copied().chain(distractors) {
            let at = ctx.rng.position(ctx.config.arena, ctx.config.item_size);
            sprites.push(Sprite::new(label, at.x, at.y));
        }
        ctx.renderer.render(&sprites);

        let wanted: Vec<String> = targets.iter().map(ShapeLabel::to_string).collect();
        ctx.display
            .set_level_info(&format!("{} - Click only: {}", level.name, wanted.join(", ")));

        let appeared_at = ctx.timers.now();
        debug!(
            "{}: round {} up at t={}ms, targets {:?}",
            level.name, self.round_index, appeared_at, wanted
        );
        self.phase = Phase::Active {
            targets,
            appeared_at,
        };
    }

    fn advance(&mut self, ctx: &mut EngineContext<'_>) -> EngineStatus {
        if self.round_index >= ctx.config.rounds_per_level {
            self.level_index += 1;
            self.round_index = 0;

            if self.level_index >= self.levels.len() {
                self.phase = Phase::Complete;
                let rounds = self.levels.len() as u32 * ctx.config.rounds_per_level;
                let average_ms = self.total_elapsed_ms as f64 / f64::from(rounds);
                info!("game complete: average {:.2}ms over {} rounds", average_ms, rounds);
                return EngineStatus::Complete { average_ms };
            }
            info!("advancing to {}", self.levels[self.level_index].name);
        }

        ctx.timers
            .schedule(TimerKind::Reveal, ctx.config.inter_round_pause_ms);
        self.phase = Phase::Ready;
        EngineStatus::Running
    }
}

impl RoundEngine for LevelRounds {
    type Label = ShapeLabel;

    fn reset(&mut self) {
        self.level_index = 0;
        self.round_index = 0;
        self.total_elapsed_ms = 0;
        self.phase = Phase::Idle;
    }

    fn begin(&mut self, ctx: &mut EngineContext<'_>) {
        ctx.display.set_score("Round 1");
        self.show_round(ctx);
    }

    fn on_interact(&mut self, label: ShapeLabel, ctx: &mut EngineContext<'_>) -> EngineStatus {
        let (hit, reaction_ms) = match &self.phase {
            Phase::Active {
                targets,
                appeared_at,
            } => (targets.contains(&label), ctx.timers.now() - appeared_at),
            _ => {
                debug!("ignoring interaction with {} outside an active round", label);
                return EngineStatus::Running;
            }
        };

        if !hit {
            info!("distractor {} clicked, game over", label);
            self.phase = Phase::Failed;
            ctx.display.set_score("Wrong shape! Game Over");
            return EngineStatus::Failed;
        }

        ctx.audio.play_success();
        self.total_elapsed_ms += reaction_ms;
        self.round_index += 1;
        ctx.display
            .set_score(&format!("Round {} | {} ms", self.round_index, reaction_ms));

        self.advance(ctx)
    }

    fn on_reveal(&mut self, ctx: &mut EngineContext<'_>) -> EngineStatus {
        match self.phase {
            Phase::Ready => {
                self.show_round(ctx);
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
