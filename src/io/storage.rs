//! Persistence collaborator: a string key-value store.
//!
//! Mirrors the shape of web local storage. Failures are real (quota,
//! serialization at the host boundary), so the seam is `Result`-typed;
//! the leaderboard is the only caller and degrades on every error.

use std::collections::HashMap;
use std::fmt;

/// Errors a backing store may report.
#[derive(Debug)]
pub enum StoreError {
    /// The store rejected the write (quota, read-only mount, ...).
    WriteFailed(String),
    /// The store could not be read at all.
    ReadFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::WriteFailed(why) => write!(f, "store write failed: {}", why),
            StoreError::ReadFailed(why) => write!(f, "store read failed: {}", why),
        }
    }
}

impl std::error::Error for StoreError {}

/// String key-value persistence.
pub trait KeyValueStore {
    /// Fetch the value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. The default backing for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with a persisted leaderboard.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
