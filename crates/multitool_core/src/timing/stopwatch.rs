//! Lap stopwatch with a 10 ms resolution.

use super::tick::{TickHandle, TickScheduler};
use super::TimingError;
use log::debug;
use std::time::Duration;

/// Resolution of the stopwatch.
pub const STOPWATCH_TICK: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchPhase {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    pub elapsed_ms: u64,
    pub running: bool,
    /// Elapsed value captured at each lap, oldest first.
    pub laps: Vec<u64>,
}

impl StopwatchState {
    pub fn phase(&self) -> StopwatchPhase {
        match (self.running, self.elapsed_ms) {
            (true, _) => StopwatchPhase::Running,
            (false, 0) => StopwatchPhase::Idle,
            (false, _) => StopwatchPhase::Paused,
        }
    }

    /// Time between consecutive laps, first lap measured from zero.
    pub fn lap_splits(&self) -> Vec<u64> {
        let mut previous = 0;
        self.laps
            .iter()
            .map(|lap| {
                let split = lap - previous;
                previous = *lap;
                split
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchAction {
    Start,
    Stop,
    Reset,
    Lap,
    Tick,
}

/// Applies one action. `Lap` and `Tick` are ignored unless running.
pub fn reduce(state: &StopwatchState, action: StopwatchAction) -> StopwatchState {
    let mut next = state.clone();
    match action {
        StopwatchAction::Start => next.running = true,
        StopwatchAction::Stop => next.running = false,
        StopwatchAction::Reset => next = StopwatchState::default(),
        StopwatchAction::Lap if state.running => next.laps.push(state.elapsed_ms),
        StopwatchAction::Tick if state.running => {
            next.elapsed_ms += STOPWATCH_TICK.as_millis() as u64;
        }
        StopwatchAction::Lap | StopwatchAction::Tick => {}
    }
    next
}

/// `MM:SS.CC` display of elapsed milliseconds.
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let centis = (ms % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

/// Stopwatch bound to a tick source.
pub struct Stopwatch<S: TickScheduler> {
    state: StopwatchState,
    scheduler: S,
    ticking: Option<TickHandle>,
}

impl<S: TickScheduler> Stopwatch<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: StopwatchState::default(),
            scheduler,
            ticking: None,
        }
    }

    pub fn state(&self) -> &StopwatchState {
        &self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn start(&mut self) {
        self.apply(StopwatchAction::Start);
    }

    pub fn stop(&mut self) {
        self.apply(StopwatchAction::Stop);
    }

    pub fn reset(&mut self) {
        self.apply(StopwatchAction::Reset);
    }

    /// Records the current elapsed time as a lap.
    pub fn lap(&mut self) -> Result<u64, TimingError> {
        if !self.state.running {
            return Err(TimingError::NotRunning);
        }
        self.apply(StopwatchAction::Lap);
        Ok(self.state.elapsed_ms)
    }

    /// Delivers every tick that came due since the last call.
    pub fn pump(&mut self) -> u32 {
        let Some(handle) = self.ticking else {
            return 0;
        };
        let due = self.scheduler.due_ticks(handle);
        for _ in 0..due {
            self.apply(StopwatchAction::Tick);
        }
        due
    }

    fn apply(&mut self, action: StopwatchAction) {
        self.state = reduce(&self.state, action);
        self.sync_ticking();
    }

    fn sync_ticking(&mut self) {
        match (self.state.running, self.ticking) {
            (true, None) => {
                self.ticking = Some(self.scheduler.start(STOPWATCH_TICK));
                debug!("event=stopwatch_start module=timing status=ok");
            }
            (false, Some(handle)) => {
                self.scheduler.cancel(handle);
                self.ticking = None;
                debug!(
                    "event=stopwatch_stop module=timing status=ok elapsed_ms={}",
                    self.state.elapsed_ms
                );
            }
            _ => {}
        }
    }
}

impl<S: TickScheduler> Drop for Stopwatch<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.ticking.take() {
            self.scheduler.cancel(handle);
        }
    }
}
