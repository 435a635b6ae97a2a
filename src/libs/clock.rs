//! Wall-clock source for the session state machine.
//!
//! The timer core never reads the system time directly. Session transitions
//! and toggle attribution take a [`Clock`] so tests can drive the machine
//! with a controlled timeline.

use chrono::Utc;

/// Supplies monotonic wall-clock timestamps in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
