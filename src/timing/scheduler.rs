//! Logical-time timer scheduler.
//!
//! The game's suspension points are all single-shot timers: the countdown
//! tick, the inter-round pause, and the solo variant's reveal delay. This
//! scheduler models them over a logical millisecond clock so ordering and
//! cancellation are exact in tests and host-driven in production.
//!
//! ## Invariants
//!
//! - At most one pending timer exists per [`TimerKind`]; scheduling a kind
//!   replaces any pending timer of that kind.
//! - `pop_due` delivers timers one at a time in due order, advancing the
//!   clock to each due instant, so a handler may schedule a follow-up timer
//!   that still lands inside the same advance window.

use log::debug;

/// The kinds of pending work a session can have in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Next 1-second countdown decrement.
    Tick,
    /// Next round (or the solo target) becomes visible.
    Reveal,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    kind: TimerKind,
    due: u64,
    seq: u64,
}

/// Single-threaded timer queue over logical milliseconds.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Arm `kind` to fire after `delay_ms`, replacing any pending timer of
    /// the same kind.
    pub fn schedule(&mut self, kind: TimerKind, delay_ms: u64) {
        self.cancel(kind);
        let due = self.now + delay_ms;
        debug!("schedule {:?} at t={}ms", kind, due);
        self.pending.push(Pending {
            kind,
            due,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Cancel any pending timer of `kind`.
    pub fn cancel(&mut self, kind: TimerKind) {
        self.pending.retain(|p| p.kind != kind);
    }

    /// Cancel everything. Called on session (re)start so no timer from a
    /// previous round can fire into the new one.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            debug!("cancel {} pending timer(s)", self.pending.len());
        }
        self.pending.clear();
    }

    /// Whether a timer of `kind` is pending.
    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|p| p.kind == kind)
    }

    /// Pop the earliest timer due at or before `until`, advancing the clock
    /// to its due instant. Returns `None` when nothing (more) is due.
    pub fn pop_due(&mut self, until: u64) -> Option<TimerKind> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;

        let fired = self.pending.swap_remove(idx);
        self.now = self.now.max(fired.due);
        Some(fired.kind)
    }

    /// Advance the clock to `until` once all due timers have been popped.
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}
