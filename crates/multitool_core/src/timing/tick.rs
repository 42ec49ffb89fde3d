//! Recurring tick sources.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identifies one started interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// Starts, polls and cancels fixed-period intervals.
pub trait TickScheduler {
    fn start(&mut self, period: Duration) -> TickHandle;
    /// Stops an interval; unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
    /// Whole periods elapsed since the previous poll of `handle`.
    fn due_ticks(&mut self, handle: TickHandle) -> u32;
    /// Number of intervals not yet cancelled.
    fn active_count(&self) -> usize;
}

impl<S: TickScheduler + ?Sized> TickScheduler for &mut S {
    fn start(&mut self, period: Duration) -> TickHandle {
        (**self).start(period)
    }

    fn cancel(&mut self, handle: TickHandle) {
        (**self).cancel(handle);
    }

    fn due_ticks(&mut self, handle: TickHandle) -> u32 {
        (**self).due_ticks(handle)
    }

    fn active_count(&self) -> usize {
        (**self).active_count()
    }
}

#[derive(Debug)]
struct ManualInterval {
    period: Duration,
    pending: Duration,
}

/// Simulated time: intervals advance only through [`ManualScheduler::advance`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    intervals: HashMap<u64, ManualInterval>,
    started: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves simulated time forward for every live interval.
    pub fn advance(&mut self, by: Duration) {
        for interval in self.intervals.values_mut() {
            interval.pending += by;
        }
    }

    /// Intervals started over the scheduler's lifetime.
    pub fn started(&self) -> usize {
        self.started
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl TickScheduler for ManualScheduler {
    fn start(&mut self, period: Duration) -> TickHandle {
        self.next_id += 1;
        self.started += 1;
        self.intervals.insert(
            self.next_id,
            ManualInterval {
                period,
                pending: Duration::ZERO,
            },
        );
        TickHandle(self.next_id)
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.intervals.remove(&handle.0).is_some() {
            self.cancelled += 1;
        }
    }

    fn due_ticks(&mut self, handle: TickHandle) -> u32 {
        let Some(interval) = self.intervals.get_mut(&handle.0) else {
            return 0;
        };
        if interval.period.is_zero() {
            return 0;
        }
        let due = interval.pending.as_nanos() / interval.period.as_nanos();
        interval.pending -= interval.period * due as u32;
        due as u32
    }

    fn active_count(&self) -> usize {
        self.intervals.len()
    }
}

#[derive(Debug)]
struct WallInterval {
    period: Duration,
    started_at: Instant,
    delivered: u128,
}

/// Real time: due ticks are derived from a monotonic clock at poll time.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    intervals: HashMap<u64, WallInterval>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickScheduler for IntervalScheduler {
    fn start(&mut self, period: Duration) -> TickHandle {
        self.next_id += 1;
        self.intervals.insert(
            self.next_id,
            WallInterval {
                period,
                started_at: Instant::now(),
                delivered: 0,
            },
        );
        TickHandle(self.next_id)
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.intervals.remove(&handle.0);
    }

    fn due_ticks(&mut self, handle: TickHandle) -> u32 {
        let Some(interval) = self.intervals.get_mut(&handle.0) else {
            return 0;
        };
        if interval.period.is_zero() {
            return 0;
        }
        let total = interval.started_at.elapsed().as_nanos() / interval.period.as_nanos();
        let due = total.saturating_sub(interval.delivered);
        interval.delivered = total;
        u32::try_from(due).unwrap_or(u32::MAX)
    }

    fn active_count(&self) -> usize {
        self.intervals.len()
    }
}
