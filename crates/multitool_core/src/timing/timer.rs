//! Countdown timer with presets and a one-shot completion event.
//!
//! # Invariants
//! - `remaining_ms` never exceeds the configured duration while running.
//! - `Finished` is emitted exactly once per countdown, on the tick that
//!   reaches zero.
//! - Reset restores the configured duration and keeps the configuration.

use super::tick::{TickHandle, TickScheduler};
use super::TimingError;
use log::{debug, info};
use std::time::Duration;

pub const TIMER_TICK: Duration = Duration::from_secs(1);

/// Minute presets offered next to the manual inputs.
pub const TIMER_PRESETS_MINUTES: [u32; 4] = [1, 5, 10, 15];

const DEFAULT_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub minutes: u32,
    pub seconds: u32,
    pub remaining_ms: u64,
    pub phase: TimerPhase,
}

impl Default for TimerState {
    fn default() -> Self {
        let mut state = Self {
            minutes: DEFAULT_MINUTES,
            seconds: 0,
            remaining_ms: 0,
            phase: TimerPhase::Idle,
        };
        state.remaining_ms = state.configured_ms();
        state
    }
}

impl TimerState {
    pub fn configured_ms(&self) -> u64 {
        (u64::from(self.minutes) * 60 + u64::from(self.seconds)) * 1000
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// `MM:SS` of the remaining time.
    pub fn display(&self) -> String {
        let total_seconds = self.remaining_ms / 1000;
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }

    /// Fraction of the configured duration already elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let configured = self.configured_ms();
        if configured == 0 {
            return 0.0;
        }
        let elapsed = configured.saturating_sub(self.remaining_ms);
        elapsed as f64 / configured as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Ignored while running. Seconds are clamped to 59.
    Configure { minutes: u32, seconds: u32 },
    /// Sets whole minutes; ignored while running.
    Preset(u32),
    Start,
    Pause,
    Reset,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Finished,
}

/// Applies one action and reports the completion event, if any.
pub fn reduce(state: &TimerState, action: TimerAction) -> (TimerState, Option<TimerEvent>) {
    let mut next = state.clone();
    let mut event = None;
    match action {
        TimerAction::Configure { minutes, seconds } if !state.is_running() => {
            next.minutes = minutes;
            next.seconds = seconds.min(59);
            next.remaining_ms = next.configured_ms();
            next.phase = TimerPhase::Idle;
        }
        TimerAction::Preset(minutes) if !state.is_running() => {
            next.minutes = minutes;
            next.seconds = 0;
            next.remaining_ms = next.configured_ms();
            next.phase = TimerPhase::Idle;
        }
        TimerAction::Start => match state.phase {
            TimerPhase::Idle | TimerPhase::Finished => {
                next.remaining_ms = next.configured_ms();
                if next.remaining_ms > 0 {
                    next.phase = TimerPhase::Running;
                }
            }
            TimerPhase::Paused if state.remaining_ms > 0 => next.phase = TimerPhase::Running,
            TimerPhase::Paused | TimerPhase::Running => {}
        },
        TimerAction::Pause if state.is_running() => next.phase = TimerPhase::Paused,
        TimerAction::Reset => {
            next.remaining_ms = next.configured_ms();
            next.phase = TimerPhase::Idle;
        }
        TimerAction::Tick if state.is_running() => {
            let tick = TIMER_TICK.as_millis() as u64;
            next.remaining_ms = state.remaining_ms.saturating_sub(tick);
            if next.remaining_ms == 0 {
                next.phase = TimerPhase::Finished;
                event = Some(TimerEvent::Finished);
            }
        }
        TimerAction::Configure { .. }
        | TimerAction::Preset(_)
        | TimerAction::Pause
        | TimerAction::Tick => {}
    }
    (next, event)
}

/// Countdown bound to a tick source.
pub struct Timer<S: TickScheduler> {
    state: TimerState,
    scheduler: S,
    ticking: Option<TickHandle>,
}

impl<S: TickScheduler> Timer<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_state(TimerState::default(), scheduler)
    }

    pub fn with_state(state: TimerState, scheduler: S) -> Self {
        let mut timer = Self {
            state,
            scheduler,
            ticking: None,
        };
        timer.sync_ticking();
        timer
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn configure(&mut self, minutes: u32, seconds: u32) {
        self.apply(TimerAction::Configure { minutes, seconds });
    }

    pub fn preset(&mut self, minutes: u32) {
        self.apply(TimerAction::Preset(minutes));
    }

    /// Starts or resumes the countdown.
    pub fn start(&mut self) -> Result<(), TimingError> {
        self.apply(TimerAction::Start);
        if self.state.is_running() {
            Ok(())
        } else {
            Err(TimingError::NoDuration)
        }
    }

    pub fn pause(&mut self) -> Result<(), TimingError> {
        if !self.state.is_running() {
            return Err(TimingError::NotRunning);
        }
        self.apply(TimerAction::Pause);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.apply(TimerAction::Reset);
    }

    /// Delivers due ticks; returns the events they produced.
    pub fn pump(&mut self) -> Vec<TimerEvent> {
        let Some(handle) = self.ticking else {
            return Vec::new();
        };
        let due = self.scheduler.due_ticks(handle);
        let mut events = Vec::new();
        for _ in 0..due {
            if !self.state.is_running() {
                break;
            }
            if let Some(event) = self.apply(TimerAction::Tick) {
                info!(
                    "event=timer_finished module=timing status=ok configured_ms={}",
                    self.state.configured_ms()
                );
                events.push(event);
            }
        }
        events
    }

    fn apply(&mut self, action: TimerAction) -> Option<TimerEvent> {
        let (next, event) = reduce(&self.state, action);
        self.state = next;
        self.sync_ticking();
        event
    }

    fn sync_ticking(&mut self) {
        match (self.state.is_running(), self.ticking) {
            (true, None) => {
                self.ticking = Some(self.scheduler.start(TIMER_TICK));
                debug!(
                    "event=timer_start module=timing status=ok remaining_ms={}",
                    self.state.remaining_ms
                );
            }
            (false, Some(handle)) => {
                self.scheduler.cancel(handle);
                self.ticking = None;
            }
            _ => {}
        }
    }
}

impl<S: TickScheduler> Drop for Timer<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.ticking.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, TimerAction, TimerEvent, TimerPhase, TimerState};

    fn running(seconds: u32) -> TimerState {
        let state = reduce(
            &TimerState::default(),
            TimerAction::Configure {
                minutes: 0,
                seconds,
            },
        )
        .0;
        reduce(&state, TimerAction::Start).0
    }

    #[test]
    fn default_is_five_idle_minutes() {
        let state = TimerState::default();
        assert_eq!(state.phase, TimerPhase::Idle);
        assert_eq!(state.display(), "05:00");
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn reaching_zero_finishes_once() {
        let state = running(2);
        let (state, event) = reduce(&state, TimerAction::Tick);
        assert_eq!(event, None);
        let (state, event) = reduce(&state, TimerAction::Tick);
        assert_eq!(event, Some(TimerEvent::Finished));
        assert_eq!(state.phase, TimerPhase::Finished);
        let (_, event) = reduce(&state, TimerAction::Tick);
        assert_eq!(event, None);
    }

    #[test]
    fn pause_freezes_and_reset_restores() {
        let state = running(10);
        let state = reduce(&state, TimerAction::Tick).0;
        let paused = reduce(&state, TimerAction::Pause).0;
        let still = reduce(&paused, TimerAction::Tick).0;
        assert_eq!(still.remaining_ms, 9_000);
        assert!((still.progress() - 0.1).abs() < 1e-9);
        let reset = reduce(&still, TimerAction::Reset).0;
        assert_eq!(reset.remaining_ms, 10_000);
        assert_eq!(reset.seconds, 10);
        assert_eq!(reset.phase, TimerPhase::Idle);
    }

    #[test]
    fn configuration_is_locked_while_running() {
        let state = running(30);
        let next = reduce(&state, TimerAction::Preset(25)).0;
        assert_eq!(next, state);
    }

    #[test]
    fn seconds_are_clamped() {
        let state = reduce(
            &TimerState::default(),
            TimerAction::Configure {
                minutes: 1,
                seconds: 75,
            },
        )
        .0;
        assert_eq!(state.seconds, 59);
        assert_eq!(state.display(), "01:59");
    }
}
