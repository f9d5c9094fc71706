//! Collaborator seams: rendering, audio, status display, persistence.
//!
//! The engine is host-agnostic. A browser host wires these traits to the
//! DOM, audio elements, and local storage; tests and headless hosts use the
//! in-memory implementations shipped here.

pub mod audio;
pub mod display;
pub mod render;
pub mod storage;

pub use audio::{AudioSink, CountingAudio, NullAudio};
pub use display::{MemoryDisplay, StatusDisplay};
pub use render::{MemoryRenderer, Renderer, Sprite};
pub use storage::{KeyValueStore, MemoryStore, StoreError};

/// The collaborator bundle a session call operates on.
///
/// Hosts own the collaborators and lend them per event dispatch, which
/// keeps the session free of host lifetimes.
pub struct SessionIo<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioSink,
    pub display: &'a mut dyn StatusDisplay,
    pub store: &'a mut dyn KeyValueStore,
}
