//! Session lifecycle state machine for one countdown run.
//!
//! A [`TimerSession`] owns the countdown engine and the capture timestamps
//! recorded on each transition. The tick source is external: the caller
//! drives [`TimerSession::tick`] once per elapsed second and the machine
//! decides whether the tick reaches the engine. Each period (study or break)
//! owns an independent session instance.
//!
//! Ending an active session goes through a confirmation port so the
//! transition commits only after an affirmative answer; a declined
//! confirmation leaves every piece of state untouched.

use crate::libs::attribution::{self, ToggleEvent};
use crate::libs::clock::Clock;
use crate::libs::countdown::{Countdown, Tick};
use crate::libs::task::Task;
use anyhow::Result;

/// Lifecycle of a countdown session.
///
/// Cyclic: any state returns to `Idle` via reset, `Running` and `Paused`
/// toggle between each other. `Init` is only ever the starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Never started.
    Init,
    /// Reset and ready to start.
    Idle,
    /// Counting down.
    Running,
    /// Counting suspended, resumable.
    Paused,
}

/// Which half of the study cycle a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Study,
    Break,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Study => "Study",
            Period::Break => "Break",
        }
    }

    pub fn other(&self) -> Period {
        match self {
            Period::Study => Period::Break,
            Period::Break => Period::Study,
        }
    }
}

/// Timestamps captured on session transitions, read by the attributor.
///
/// `started_at` is stamped when entering `Running` from `Init` or `Idle`;
/// resuming from `Paused` leaves it unchanged. `paused_at` is stamped when
/// leaving `Running` for `Paused`. Both clear on reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCapture {
    pub started_at: Option<i64>,
    pub paused_at: Option<i64>,
    /// One completion credit is allowed per pause window; cleared when the
    /// session re-enters `Running`.
    pub pause_credited: bool,
}

/// Asks the user whether an active session may be ended.
pub trait ConfirmReset {
    fn confirm(&self) -> Result<bool>;
}

/// Result of a reset request routed through the confirmation port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Reset,
    Declined,
}

pub struct TimerSession {
    state: SessionState,
    countdown: Countdown,
    capture: SessionCapture,
}

impl TimerSession {
    pub fn new(duration_minutes: u32) -> Self {
        TimerSession {
            state: SessionState::Init,
            countdown: Countdown::new(duration_minutes),
            capture: SessionCapture::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn capture(&self) -> &SessionCapture {
        &self.capture
    }

    /// Whether the external tick source should currently be armed.
    pub fn is_ticking(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Enters `Running`.
    ///
    /// First entry from `Init` or `Idle` stamps `started_at`; resuming from
    /// `Paused` keeps the original start and only clears the pause-window
    /// credit guard. Already running is a no-op.
    pub fn start(&mut self, clock: &dyn Clock) {
        match self.state {
            SessionState::Init | SessionState::Idle => {
                self.capture.started_at = Some(clock.now_ms());
                self.capture.paused_at = None;
                self.capture.pause_credited = false;
                self.state = SessionState::Running;
            }
            SessionState::Paused => {
                self.capture.pause_credited = false;
                self.state = SessionState::Running;
            }
            SessionState::Running => {}
        }
    }

    /// Leaves `Running` for `Paused`, stamping `paused_at`.
    pub fn pause(&mut self, clock: &dyn Clock) {
        if self.state == SessionState::Running {
            self.capture.paused_at = Some(clock.now_ms());
            self.state = SessionState::Paused;
        }
    }

    /// Start/pause toggle as bound to the single control button.
    pub fn toggle(&mut self, clock: &dyn Clock) {
        match self.state {
            SessionState::Running => self.pause(clock),
            _ => self.start(clock),
        }
    }

    /// Drives the countdown by one second while running.
    ///
    /// Returns `None` when the session is not running. A finished run
    /// auto-resets to `Idle` with cleared capture; no confirmation applies
    /// to the auto-reset. The finish outcome is still reported so callers
    /// can notify the user.
    pub fn tick(&mut self) -> Option<Tick> {
        if self.state != SessionState::Running {
            return None;
        }
        let outcome = self.countdown.tick();
        if outcome == Tick::Finished {
            self.capture = SessionCapture::default();
            self.countdown.reset();
            self.state = SessionState::Idle;
        }
        Some(outcome)
    }

    /// Ends the session and returns to `Idle`.
    ///
    /// While `Running` or `Paused` the confirmation port is consulted first
    /// and a declined answer retains the prior state unchanged. From `Init`
    /// or `Idle` the reset applies without confirmation.
    pub fn reset(&mut self, confirm: &dyn ConfirmReset) -> Result<ResetOutcome> {
        if matches!(self.state, SessionState::Running | SessionState::Paused) && !confirm.confirm()? {
            return Ok(ResetOutcome::Declined);
        }
        self.capture = SessionCapture::default();
        self.countdown.reset();
        self.state = SessionState::Idle;
        Ok(ResetOutcome::Reset)
    }

    /// Applies a new duration to the countdown engine.
    ///
    /// Ignored while a session is active; durations only change between
    /// sessions. Zero durations are rejected by the engine. Returns whether
    /// the duration was applied.
    pub fn configure_duration(&mut self, minutes: u32) -> bool {
        if matches!(self.state, SessionState::Running | SessionState::Paused) {
            return false;
        }
        self.countdown.configure(minutes)
    }

    /// Computes the completion time to persist for a task toggle.
    ///
    /// Snapshots the session state and capture as of the click, consults the
    /// attributor, and consumes the pause-window credit when one was spent.
    /// The caller owns the write-through to the task store; nothing here is
    /// considered committed until that write succeeds.
    pub fn attribute_toggle(&mut self, task: &Task, clicked_at: i64, is_break: bool, activated_at: Option<i64>) -> i64 {
        let event = ToggleEvent {
            was_completed: task.is_completed,
            accumulated_ms: task.completion_time,
            state: self.state,
            capture: self.capture,
            clicked_at,
            is_break,
            activated_at,
        };
        let outcome = attribution::compute_completion_time(&event);
        if outcome.consumed_pause_credit {
            self.capture.pause_credited = true;
        }
        outcome.completion_time
    }
}
