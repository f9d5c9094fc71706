//! # reflex-arena
//!
//! A reaction-time minigame engine. Shapes or boxes appear at random
//! positions and times; the player clicks targets before a wrong click
//! ends the round; reaction times accumulate into a local leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: Rendering, audio, persistence, and status display
//!    are collaborator traits. A browser host wires them to the DOM; tests
//!    use the in-memory implementations.
//!
//! 2. **Discrete Events Over Callbacks**: Interactions and timer firings
//!    are explicit events processed one at a time against a state machine.
//!    Timers run on a logical-millisecond scheduler, so whole sessions
//!    replay deterministically without wall-clock waits.
//!
//! 3. **Configuration Over Convention**: Countdown length, round counts,
//!    pauses, arena size, and difficulty tiers are named configuration
//!    with defaults matching the shipped game.
//!
//! ## Modules
//!
//! - `core`: labels, levels, configuration, deterministic RNG
//! - `timing`: logical-time scheduler and the pre-game countdown
//! - `engine`: the `RoundEngine` seam and both game variants
//! - `session`: the controller orchestrating countdown, rounds, leaderboard
//! - `io`: collaborator traits plus in-memory implementations
//! - `score`: the persisted leaderboard

pub mod core;
pub mod engine;
pub mod io;
pub mod score;
pub mod session;
pub mod timing;

// Re-export commonly used types
pub use crate::core::{
    ArenaBounds, BoxTarget, Color, Difficulty, GameConfig, GameRng, Level, Point, Shape,
    ShapeLabel, SoloConfig,
};

pub use crate::engine::{EngineContext, EngineStatus, LevelRounds, RoundEngine, SoloRounds};

pub use crate::io::{
    AudioSink, CountingAudio, KeyValueStore, MemoryDisplay, MemoryRenderer, MemoryStore,
    NullAudio, Renderer, SessionIo, Sprite, StatusDisplay, StoreError,
};

pub use crate::score::{Leaderboard, LEADERBOARD_KEY};

pub use crate::session::{Event, Session, SessionPhase};

pub use crate::timing::{Countdown, CountdownStep, Scheduler, TimerKind};
