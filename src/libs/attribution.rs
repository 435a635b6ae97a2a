//! Elapsed-time attribution for task completion toggles.
//!
//! Converts the wall-clock time a task spent in an active session window
//! into the accumulated completion time persisted on the task. The policy
//! reads the session capture as of the click and never performs the write
//! itself.
//!
//! Rules, in order:
//! - break periods never move accumulated time, the toggle only flips the
//!   completion flag;
//! - un-checking a completed task never subtracts time;
//! - while `Running`, checking a task credits the span since the effective
//!   start of its active window;
//! - while `Paused`, the span up to `paused_at` is credited at most once per
//!   pause window (the guard on the capture suppresses further credits);
//! - while `Idle` or `Init`, and for malformed captures, the accumulated
//!   time is left unchanged. Elapsed spans clamp at zero, never negative.

use crate::libs::session::{SessionCapture, SessionState};

/// Inputs for a single completion toggle, snapshotted at click time.
#[derive(Debug, Clone, Copy)]
pub struct ToggleEvent {
    /// Completion flag before the toggle.
    pub was_completed: bool,
    /// Accumulated completion time persisted on the task, in milliseconds.
    pub accumulated_ms: i64,
    pub state: SessionState,
    pub capture: SessionCapture,
    /// Wall-clock time of the toggle, in milliseconds.
    pub clicked_at: i64,
    pub is_break: bool,
    /// When the task became the active one, if the caller tracked it.
    /// Bounds the credited span so a task activated mid-session is not
    /// credited for time before its activation.
    pub activated_at: Option<i64>,
}

/// Result of an attribution: the value to persist and whether the single
/// pause-window credit was spent on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution {
    pub completion_time: i64,
    pub consumed_pause_credit: bool,
}

impl Attribution {
    fn unchanged(event: &ToggleEvent) -> Self {
        Attribution {
            completion_time: event.accumulated_ms,
            consumed_pause_credit: false,
        }
    }
}

/// Computes the new accumulated completion time for a toggle event.
pub fn compute_completion_time(event: &ToggleEvent) -> Attribution {
    if event.is_break || event.was_completed {
        return Attribution::unchanged(event);
    }
    match event.state {
        SessionState::Init | SessionState::Idle => Attribution::unchanged(event),
        SessionState::Running => {
            let started = match event.capture.started_at {
                Some(t) => t,
                None => return Attribution::unchanged(event),
            };
            let elapsed = (event.clicked_at - effective_start(started, event.activated_at)).max(0);
            Attribution {
                completion_time: event.accumulated_ms + elapsed,
                consumed_pause_credit: false,
            }
        }
        SessionState::Paused => {
            if event.capture.pause_credited {
                return Attribution::unchanged(event);
            }
            let (started, paused) = match (event.capture.started_at, event.capture.paused_at) {
                (Some(s), Some(p)) => (s, p),
                _ => return Attribution::unchanged(event),
            };
            let elapsed = (paused - effective_start(started, event.activated_at)).max(0);
            Attribution {
                completion_time: event.accumulated_ms + elapsed,
                consumed_pause_credit: true,
            }
        }
    }
}

/// The active window opens at the later of session start and task
/// activation.
fn effective_start(started_at: i64, activated_at: Option<i64>) -> i64 {
    match activated_at {
        Some(t) => t.max(started_at),
        None => started_at,
    }
}
