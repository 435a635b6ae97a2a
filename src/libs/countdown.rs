//! Countdown engine for a single timer session.
//!
//! Owns the `{minutes, seconds}` pair displayed to the user and decrements
//! it once per elapsed second while the owning session is running. The
//! engine knows nothing about session states; arming and disarming the tick
//! source is the session state machine's job.

/// Outcome of a single one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time remains on the clock.
    Counting,
    /// The countdown just reached zero. Reported exactly once per run.
    Finished,
    /// The countdown already completed and waits to be reconfigured.
    Spent,
}

/// A minute/second countdown with a one-shot finish latch.
///
/// Invariants: the pair never goes negative, `seconds` stays in `0..=59`,
/// and after reporting [`Tick::Finished`] the engine stays at `(0, 0)` until
/// it is reset or reconfigured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    minutes: u32,
    seconds: u32,
    duration_minutes: u32,
    finished: bool,
}

impl Countdown {
    /// Builds a countdown armed at the given duration.
    ///
    /// The duration is at least one minute; a zero clamps to one so a fresh
    /// engine can never start already exhausted.
    pub fn new(duration_minutes: u32) -> Self {
        let duration_minutes = duration_minutes.max(1);
        Countdown {
            minutes: duration_minutes,
            seconds: 0,
            duration_minutes,
            finished: false,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Replaces the configured duration and resets the clock.
    ///
    /// Zero durations are rejected and the previous configuration is kept.
    /// Returns whether the new duration was accepted.
    pub fn configure(&mut self, duration_minutes: u32) -> bool {
        if duration_minutes == 0 {
            return false;
        }
        self.duration_minutes = duration_minutes;
        self.reset();
        true
    }

    /// Rewinds the clock to the configured duration and re-arms the latch.
    pub fn reset(&mut self) {
        self.minutes = self.duration_minutes;
        self.seconds = 0;
        self.finished = false;
    }

    /// Advances the countdown by one second.
    ///
    /// Underflowing `seconds` borrows a minute. The tick that lands on
    /// `(0, 0)` reports [`Tick::Finished`]; every tick after that reports
    /// [`Tick::Spent`] until the engine is reset.
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Spent;
        }
        // Guard against ticking an already-exhausted clock.
        if self.minutes == 0 && self.seconds == 0 {
            self.finished = true;
            return Tick::Finished;
        }
        if self.seconds == 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            self.seconds -= 1;
        }
        if self.minutes == 0 && self.seconds == 0 {
            self.finished = true;
            return Tick::Finished;
        }
        Tick::Counting
    }
}
