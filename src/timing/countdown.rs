//! Pre-game countdown.
//!
//! A single-shot decrement machine: started at N seconds, it reports N
//! immediately, then N-1, ... down to completion, which fires exactly once.
//! The session wires it to the scheduler's 1-second `Tick` timer; this type
//! itself holds no timers and is trivially unit-testable.

use log::debug;

/// Result of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still counting; show the new remaining value.
    Tick(u32),
    /// Reached zero; fire the continuation. Emitted exactly once per start.
    Finished,
    /// The countdown is not running. Stray ticks are ignored.
    Idle,
}

/// Countdown state.
///
/// Starting while already running supersedes the previous countdown: the
/// remaining count resets and the old tick chain is abandoned (the session
/// re-arms the single `Tick` timer, which replaces by kind).
#[derive(Debug, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// Create an idle countdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a countdown is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or supersede) the countdown at `seconds`. Returns the initial
    /// value to display.
    pub fn start(&mut self, seconds: u32) -> u32 {
        if self.running {
            debug!("countdown superseded at {}s remaining", self.remaining);
        }
        self.remaining = seconds;
        self.running = seconds > 0;
        seconds
    }

    /// Process one 1-second tick.
    pub fn tick(&mut self) -> CountdownStep {
        if !self.running {
            return CountdownStep::Idle;
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            CountdownStep::Tick(self.remaining)
        } else {
            self.running = false;
            CountdownStep::Finished
        }
    }
}
