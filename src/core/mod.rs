//! Core types: labels, levels, configuration, RNG.
//!
//! These are the game-agnostic building blocks. Variants configure them
//! rather than hardcoding constants in the round logic.

pub mod config;
pub mod label;
pub mod level;
pub mod rng;

pub use config::{ArenaBounds, Difficulty, GameConfig, SoloConfig};
pub use label::{BoxTarget, Color, Shape, ShapeLabel};
pub use level::Level;
pub use rng::{GameRng, Point};
