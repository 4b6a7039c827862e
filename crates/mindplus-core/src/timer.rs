//! Countdown timer for calm sessions.
//!
//! The state lives in a plain [`TimerState`] value and only changes through
//! [`reduce`]. [`CountdownTimer`] wraps it and publishes every change on the
//! event bus, so the view layer never owns the countdown.

use mindplus_types::{
    MindError, Result,
    calm::TimerState,
    event::MindEvent,
};
use crate::event_bus::EventBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// (Re)start from the given duration
    Start(i64),
    /// Pause or resume without touching the remaining time
    SetRunning(bool),
    /// One second elapsed
    Tick,
}

/// Build a fresh, paused timer state.
pub fn initial_state(duration_seconds: i64) -> Result<TimerState> {
    let total = validate_duration(duration_seconds)?;
    Ok(TimerState {
        total_duration_seconds: total,
        remaining_seconds: total,
        running: false,
    })
}

/// Pure transition function.
pub fn reduce(state: TimerState, action: TimerAction) -> Result<TimerState> {
    match action {
        TimerAction::Start(duration) => {
            let total = validate_duration(duration)?;
            Ok(TimerState {
                total_duration_seconds: total,
                remaining_seconds: total,
                running: true,
            })
        }
        TimerAction::SetRunning(running) => Ok(TimerState { running, ..state }),
        TimerAction::Tick => {
            if !state.running || state.remaining_seconds == 0 {
                return Ok(state);
            }
            Ok(TimerState {
                remaining_seconds: state.remaining_seconds - 1,
                ..state
            })
        }
    }
}

fn validate_duration(duration_seconds: i64) -> Result<u32> {
    if duration_seconds <= 0 {
        return Err(MindError::InvalidDuration(duration_seconds));
    }
    u32::try_from(duration_seconds).map_err(|_| MindError::InvalidDuration(duration_seconds))
}

/// Format seconds as `mm:ss`.
pub fn format_remaining(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Event-publishing countdown
pub struct CountdownTimer {
    state: TimerState,
    event_bus: EventBus,
    /// Last value of an externally controlled start flag
    external_start: Option<bool>,
}

impl CountdownTimer {
    pub fn new(duration_seconds: i64, event_bus: EventBus) -> Result<Self> {
        Ok(Self {
            state: initial_state(duration_seconds)?,
            event_bus,
            external_start: None,
        })
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn total_duration_seconds(&self) -> u32 {
        self.state.total_duration_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn progress_fraction(&self) -> f32 {
        self.state.progress_fraction()
    }

    pub fn remaining_label(&self) -> String {
        format_remaining(self.state.remaining_seconds)
    }

    pub fn start(&mut self, duration_seconds: i64) -> Result<()> {
        self.dispatch(TimerAction::Start(duration_seconds))
    }

    /// Restart with the current total duration.
    pub fn restart(&mut self) -> Result<()> {
        self.start(i64::from(self.state.total_duration_seconds))
    }

    pub fn set_running(&mut self, running: bool) {
        self.dispatch_or_log(TimerAction::SetRunning(running));
    }

    pub fn tick(&mut self) {
        self.dispatch_or_log(TimerAction::Tick);
    }

    /// Follow a start flag owned by a parent screen.
    ///
    /// A rising edge restarts the countdown; any other value only pauses or
    /// resumes it.
    pub fn apply_external_start(&mut self, start: bool) -> Result<()> {
        let previous = self.external_start.replace(start);
        if start && previous != Some(true) {
            self.restart()
        } else {
            self.set_running(start);
            Ok(())
        }
    }

    /// For callers with nowhere to propagate an error to.
    fn dispatch_or_log(&mut self, action: TimerAction) {
        if let Err(e) = self.dispatch(action) {
            log::error!("Timer action {:?} rejected: {}", action, e);
        }
    }

    fn dispatch(&mut self, action: TimerAction) -> Result<()> {
        let previous = self.state;
        let next = reduce(previous, action)?;
        if next == previous {
            return Ok(());
        }

        self.state = next;
        self.event_bus.emit(MindEvent::TimerStateChanged { state: next });
        if next.is_finished() && !previous.is_finished() {
            log::debug!("Calm countdown finished after {}s", next.total_duration_seconds);
            self.event_bus.emit(MindEvent::TimerFinished);
        }
        Ok(())
    }
}
