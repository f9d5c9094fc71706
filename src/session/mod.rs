//! Session lifecycle: start/restart/game-over orchestration.

pub mod controller;

pub use controller::{Event, Session, SessionPhase};
