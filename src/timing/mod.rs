//! Timer infrastructure: the logical-time scheduler and the countdown.

pub mod countdown;
pub mod scheduler;

pub use countdown::{Countdown, CountdownStep};
pub use scheduler::{Scheduler, TimerKind};
