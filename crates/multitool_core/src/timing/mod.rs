//! Tick-driven stopwatch, countdown timer and speed test simulation.
//!
//! # Responsibility
//! - Model each widget as a plain state struct plus a pure `reduce`.
//! - Own the recurring tick source of a running widget through a
//!   [`TickScheduler`] so tests can advance time without sleeping.
//!
//! # Invariants
//! - A driver holds at most one live tick handle.
//! - The handle is cancelled whenever the widget leaves its running
//!   state and when the driver is dropped.
//! - Ticks polled for a cancelled handle are never delivered.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod stopwatch;
pub mod tick;
pub mod timer;

pub use tick::{IntervalScheduler, ManualScheduler, TickHandle, TickScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// The action needs a running widget.
    NotRunning,
    /// A countdown was started with a zero duration.
    NoDuration,
}

impl Display for TimingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRunning => write!(f, "not running"),
            Self::NoDuration => write!(f, "timer duration is zero"),
        }
    }
}

impl Error for TimingError {}
