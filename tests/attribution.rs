#[cfg(test)]
mod tests {
    use pomodo::libs::attribution::{compute_completion_time, ToggleEvent};
    use pomodo::libs::clock::Clock;
    use pomodo::libs::session::{ConfirmReset, SessionCapture, SessionState, TimerSession};
    use pomodo::libs::task::Task;
    use std::cell::Cell;

    struct FakeClock(Cell<i64>);

    impl FakeClock {
        fn new(start_ms: i64) -> Self {
            FakeClock(Cell::new(start_ms))
        }

        fn set(&self, ms: i64) {
            self.0.set(ms);
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> i64 {
            self.0.get()
        }
    }

    struct Accept;

    impl ConfirmReset for Accept {
        fn confirm(&self) -> anyhow::Result<bool> {
            Ok(true)
        }
    }

    fn task_with_time(ms: i64) -> Task {
        let mut task = Task::new("study notes");
        task.completion_time = ms;
        task
    }

    #[test]
    fn test_running_credits_span_since_session_start() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(25);
        session.start(&clock);

        // Marked complete ten seconds into the run.
        let time = session.attribute_toggle(&task_with_time(2_000), 10_000, false, None);
        assert_eq!(time, 12_000);
    }

    #[test]
    fn test_running_credit_bounded_by_activation_time() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(25);
        session.start(&clock);

        // Task became active four seconds in; only six seconds count.
        let time = session.attribute_toggle(&task_with_time(0), 10_000, false, Some(4_000));
        assert_eq!(time, 6_000);
    }

    #[test]
    fn test_paused_credits_once_per_pause_window() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(25);
        session.start(&clock);
        clock.set(5_000);
        session.pause(&clock);

        // First completion in the window credits up to the pause stamp.
        let first = session.attribute_toggle(&task_with_time(0), 5_000, false, None);
        assert_eq!(first, 5_000);

        // Second completion in the same window gets nothing.
        let second = session.attribute_toggle(&task_with_time(0), 6_000, false, None);
        assert_eq!(second, 0);
    }

    #[test]
    fn test_pause_credit_guard_resets_on_resume() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(25);
        session.start(&clock);
        clock.set(5_000);
        session.pause(&clock);
        session.attribute_toggle(&task_with_time(0), 5_000, false, None);

        clock.set(8_000);
        session.start(&clock);
        clock.set(9_000);
        session.pause(&clock);

        // New pause window, new credit.
        let time = session.attribute_toggle(&task_with_time(0), 9_000, false, None);
        assert_eq!(time, 9_000);
    }

    #[test]
    fn test_unchecking_never_subtracts_time() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(25);
        session.start(&clock);

        let mut task = task_with_time(30_000);
        task.is_completed = true;
        let time = session.attribute_toggle(&task, 10_000, false, None);
        assert_eq!(time, 30_000);
    }

    #[test]
    fn test_break_period_never_changes_time() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(10);
        session.start(&clock);

        let time = session.attribute_toggle(&task_with_time(7_000), 10_000, true, None);
        assert_eq!(time, 7_000);

        clock.set(5_000);
        session.pause(&clock);
        let time = session.attribute_toggle(&task_with_time(7_000), 6_000, true, None);
        assert_eq!(time, 7_000);
        // The break toggle did not consume the pause-window credit.
        assert!(!session.capture().pause_credited);
    }

    #[test]
    fn test_idle_and_init_leave_time_unchanged() {
        let clock = FakeClock::new(0);
        let mut session = TimerSession::new(25);

        let time = session.attribute_toggle(&task_with_time(4_000), 10_000, false, None);
        assert_eq!(time, 4_000);

        session.start(&clock);
        session.reset(&Accept).unwrap();
        let time = session.attribute_toggle(&task_with_time(4_000), 20_000, false, None);
        assert_eq!(time, 4_000);
    }

    #[test]
    fn test_malformed_capture_contributes_zero() {
        // Paused state without a pause stamp must not credit anything.
        let event = ToggleEvent {
            was_completed: false,
            accumulated_ms: 1_000,
            state: SessionState::Paused,
            capture: SessionCapture {
                started_at: Some(0),
                paused_at: None,
                pause_credited: false,
            },
            clicked_at: 5_000,
            is_break: false,
            activated_at: None,
        };
        let outcome = compute_completion_time(&event);
        assert_eq!(outcome.completion_time, 1_000);
        assert!(!outcome.consumed_pause_credit);
    }

    #[test]
    fn test_elapsed_span_clamps_at_zero() {
        // A pause stamp earlier than the effective start never subtracts.
        let event = ToggleEvent {
            was_completed: false,
            accumulated_ms: 1_000,
            state: SessionState::Paused,
            capture: SessionCapture {
                started_at: Some(10_000),
                paused_at: Some(4_000),
                pause_credited: false,
            },
            clicked_at: 12_000,
            is_break: false,
            activated_at: None,
        };
        let outcome = compute_completion_time(&event);
        assert_eq!(outcome.completion_time, 1_000);
    }
}
