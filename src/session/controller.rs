//! Session controller: owns play/idle state and orchestrates
//! countdown -> round engine -> leaderboard.
//!
//! All the module-level flags of the original UI build (round counters,
//! `isPlaying`, the one-shot start listener) live here as one owned state
//! object. Events enter one at a time from the host's single dispatch
//! context; timers enter through [`Session::advance`], which pumps the
//! scheduler in due order.

use log::{debug, info};

use crate::core::{GameConfig, GameRng};
use crate::engine::{EngineContext, EngineStatus, RoundEngine};
use crate::io::SessionIo;
use crate::score::Leaderboard;
use crate::timing::{Countdown, CountdownStep, Scheduler, TimerKind};

/// A player-originated event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event<L> {
    /// A rendered item was activated. Background misses are never routed
    /// here; hosts only dispatch explicit element interactions.
    Interact(L),
    /// The idle arena was pressed (not on an item).
    PressArena,
    /// The restart affordance was pressed.
    PressRestart,
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionPhase {
    /// Nothing started yet.
    Idle,
    /// "Get Ready" countdown in progress.
    Countdown,
    /// Rounds are being played.
    Playing,
    /// The game ended. `average_ms` is the recorded final average, or
    /// `None` when a wrong click ended the game (nothing is recorded then).
    Over { average_ms: Option<f64> },
}

/// Session controller over one round engine.
pub struct Session<E: RoundEngine> {
    engine: E,
    config: GameConfig,
    leaderboard: Leaderboard,
    rng: GameRng,
    timers: Scheduler,
    countdown: Countdown,
    phase: SessionPhase,
    /// One auto-start via the arena, consumed on first use.
    auto_start_armed: bool,
}

impl<E: RoundEngine> Session<E> {
    /// Create a session with a deterministic seed.
    #[must_use]
    pub fn new(engine: E, config: GameConfig, seed: u64) -> Self {
        let leaderboard = Leaderboard::new(config.leaderboard_capacity);
        Self {
            engine,
            config,
            leaderboard,
            rng: GameRng::new(seed),
            timers: Scheduler::new(),
            countdown: Countdown::new(),
            phase: SessionPhase::Idle,
            auto_start_armed: true,
        }
    }

    /// Create a session seeded from host entropy.
    #[must_use]
    pub fn from_entropy(engine: E, config: GameConfig) -> Self {
        let rng = GameRng::from_entropy();
        let seed = rng.seed();
        let mut session = Self::new(engine, config, seed);
        session.rng = rng;
        session
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether a game is in progress (countdown included, like the
    /// original's `isPlaying`).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, SessionPhase::Countdown | SessionPhase::Playing)
    }

    /// The round engine, for status inspection.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable engine access, e.g. to move a difficulty selector mid-game.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timers.now()
    }

    /// Render the persisted leaderboard. Hosts call this once on load.
    pub fn boot(&mut self, io: &mut SessionIo<'_>) {
        let scores = self.leaderboard.load(io.store);
        io.display.show_leaderboard(&scores);
    }

    /// Feed one player event into the session.
    pub fn handle(&mut self, event: Event<E::Label>, io: &mut SessionIo<'_>) {
        match event {
            Event::Interact(label) => self.interact(label, io),
            Event::PressArena => {
                if self.auto_start_armed && self.phase == SessionPhase::Idle {
                    self.auto_start_armed = false;
                    self.force_start(io);
                } else {
                    debug!("arena press ignored in {:?}", self.phase);
                }
            }
            Event::PressRestart => self.restart(io),
        }
    }

    /// Start a session. No-op while a countdown or game is in progress.
    pub fn start(&mut self, io: &mut SessionIo<'_>) {
        if self.is_playing() {
            debug!("start ignored, session already in progress");
            return;
        }
        self.force_start(io);
    }

    /// Restart unconditionally, superseding any session in progress.
    pub fn restart(&mut self, io: &mut SessionIo<'_>) {
        self.force_start(io);
    }

    /// Advance logical time by `ms`, firing due timers one at a time.
    pub fn advance(&mut self, ms: u64, io: &mut SessionIo<'_>) {
        let until = self.timers.now() + ms;
        while let Some(kind) = self.timers.pop_due(until) {
            self.on_timer(kind, io);
        }
        self.timers.settle(until);
    }

    fn force_start(&mut self, io: &mut SessionIo<'_>) {
        info!("session starting");
        self.timers.cancel_all();
        self.engine.reset();
        self.phase = SessionPhase::Countdown;

        io.renderer.clear();
        io.display.set_restart_visible(false);
        io.display.set_level_info("");
        io.display.set_score("Get Ready...");

        let initial = self.countdown.start(self.config.countdown_seconds);
        if initial == 0 {
            self.begin_play(io);
        } else {
            io.display
                .set_countdown(&format!("Starting in {}...", initial));
            self.timers.schedule(TimerKind::Tick, 1000);
        }
    }

    fn begin_play(&mut self, io: &mut SessionIo<'_>) {
        io.display.set_countdown("");
        io.audio.play_start();
        self.phase = SessionPhase::Playing;

        let Self {
            engine,
            config,
            rng,
            timers,
            ..
        } = self;
        let mut ctx = EngineContext {
            config,
            rng,
            timers,
            renderer: &mut *io.renderer,
            audio: &mut *io.audio,
            display: &mut *io.display,
        };
        engine.begin(&mut ctx);
    }

    fn interact(&mut self, label: E::Label, io: &mut SessionIo<'_>) {
        if self.phase != SessionPhase::Playing {
            debug!("interaction ignored in {:?}", self.phase);
            return;
        }

        let Self {
            engine,
            config,
            rng,
            timers,
            ..
        } = self;
        let mut ctx = EngineContext {
            config,
            rng,
            timers,
            renderer: &mut *io.renderer,
            audio: &mut *io.audio,
            display: &mut *io.display,
        };
        let status = engine.on_interact(label, &mut ctx);
        self.apply_status(status, io);
    }

    fn on_timer(&mut self, kind: TimerKind, io: &mut SessionIo<'_>) {
        match kind {
            TimerKind::Tick => {
                if self.phase != SessionPhase::Countdown {
                    debug!("stale countdown tick ignored");
                    return;
                }
                match self.countdown.tick() {
                    CountdownStep::Tick(remaining) => {
                        io.display
                            .set_countdown(&format!("Starting in {}...", remaining));
                        self.timers.schedule(TimerKind::Tick, 1000);
                    }
                    CountdownStep::Finished => self.begin_play(io),
                    CountdownStep::Idle => debug!("tick with no countdown running"),
                }
            }
            TimerKind::Reveal => {
                if self.phase != SessionPhase::Playing {
                    debug!("stale reveal ignored");
                    return;
                }
                let Self {
                    engine,
                    config,
                    rng,
                    timers,
                    ..
                } = self;
                let mut ctx = EngineContext {
                    config,
                    rng,
                    timers,
                    renderer: &mut *io.renderer,
                    audio: &mut *io.audio,
                    display: &mut *io.display,
                };
                let status = engine.on_reveal(&mut ctx);
                self.apply_status(status, io);
            }
        }
    }

    fn apply_status(&mut self, status: EngineStatus, io: &mut SessionIo<'_>) {
        match status {
            EngineStatus::Running => {}
            EngineStatus::Failed => {
                info!("session over: wrong click");
                self.phase = SessionPhase::Over { average_ms: None };
                io.display.set_restart_visible(true);
            }
            EngineStatus::Complete { average_ms } => {
                info!("session over: complete, average {:.2}ms", average_ms);
                self.phase = SessionPhase::Over {
                    average_ms: Some(average_ms),
                };
                io.display
                    .set_score(&format!("Game Over! Avg Time: {:.2} ms", average_ms));
                if let Some(scores) = self.leaderboard.record(io.store, average_ms) {
                    io.display.show_leaderboard(&scores);
                }
                io.display.set_restart_visible(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LevelRounds;
    use crate::io::{CountingAudio, MemoryDisplay, MemoryRenderer, MemoryStore};

    struct Collab {
        renderer: MemoryRenderer,
        audio: CountingAudio,
        display: MemoryDisplay,
        store: MemoryStore,
    }

    impl Collab {
        fn new() -> Self {
            Self {
                renderer: MemoryRenderer::new(),
                audio: CountingAudio::default(),
                display: MemoryDisplay::new(),
                store: MemoryStore::new(),
            }
        }

        fn io(&mut self) -> SessionIo<'_> {
            SessionIo {
                renderer: &mut self.renderer,
                audio: &mut self.audio,
                display: &mut self.display,
                store: &mut self.store,
            }
        }
    }

    fn session() -> Session<LevelRounds> {
        Session::new(LevelRounds::default(), GameConfig::default(), 42)
    }

    #[test]
    fn test_arena_press_auto_starts_once() {
        let mut s = session();
        let mut collab = Collab::new();

        s.handle(Event::PressArena, &mut collab.io());
        assert_eq!(s.phase(), SessionPhase::Countdown);
        assert_eq!(collab.display.score, "Get Ready...");
        assert_eq!(collab.display.countdown, "Starting in 2...");

        // The one-shot is consumed: a second press mid-countdown is inert
        s.handle(Event::PressArena, &mut collab.io());
        assert_eq!(s.phase(), SessionPhase::Countdown);
    }

    #[test]
    fn test_countdown_ticks_then_play_begins() {
        let mut s = session();
        let mut collab = Collab::new();
        s.start(&mut collab.io());

        s.advance(1000, &mut collab.io());
        assert_eq!(collab.display.countdown, "Starting in 1...");
        assert_eq!(s.phase(), SessionPhase::Countdown);

        s.advance(1000, &mut collab.io());
        assert_eq!(collab.display.countdown, "");
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(collab.audio.starts, 1);
        assert!(!collab.renderer.visible.is_empty());
    }

    #[test]
    fn test_start_is_noop_while_playing() {
        let mut s = session();
        let mut collab = Collab::new();
        s.start(&mut collab.io());
        s.advance(2000, &mut collab.io());

        let targets = s.engine().current_targets().to_vec();
        s.start(&mut collab.io());

        // Still the same round
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(s.engine().current_targets(), targets.as_slice());
    }

    #[test]
    fn test_restart_supersedes_mid_game() {
        let mut s = session();
        let mut collab = Collab::new();
        s.start(&mut collab.io());
        s.advance(2000, &mut collab.io());
        assert_eq!(s.phase(), SessionPhase::Playing);

        s.handle(Event::PressRestart, &mut collab.io());
        assert_eq!(s.phase(), SessionPhase::Countdown);
        assert_eq!(s.engine().round_index(), 0);
        assert!(collab.renderer.visible.is_empty());
    }

    #[test]
    fn test_boot_renders_persisted_scores() {
        let mut s = session();
        let mut collab = Collab::new();
        collab.store = MemoryStore::new().with_entry("leaderboard", "[12.5,40.0]");

        s.boot(&mut collab.io());
        assert_eq!(collab.display.leaderboard, vec![12.5, 40.0]);
    }

    #[test]
    fn test_interaction_while_idle_is_ignored() {
        let mut s = session();
        let mut collab = Collab::new();

        let label = crate::core::ShapeLabel::all()[0];
        s.handle(Event::Interact(label), &mut collab.io());
        assert_eq!(s.phase(), SessionPhase::Idle);
    }
}
