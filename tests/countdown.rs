#[cfg(test)]
mod tests {
    use pomodo::libs::countdown::{Countdown, Tick};

    #[test]
    fn test_new_starts_at_configured_duration() {
        let countdown = Countdown::new(25);
        assert_eq!(countdown.minutes(), 25);
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_new_clamps_zero_duration_to_one_minute() {
        // A zero-minute engine would report Finished on its very first
        // tick; construction clamps instead.
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.minutes(), 1);
        assert_eq!(countdown.seconds(), 0);
        assert_eq!(countdown.tick(), Tick::Counting);
    }

    #[test]
    fn test_tick_borrows_a_minute_on_second_underflow() {
        let mut countdown = Countdown::new(2);
        assert_eq!(countdown.tick(), Tick::Counting);
        assert_eq!(countdown.minutes(), 1);
        assert_eq!(countdown.seconds(), 59);
    }

    #[test]
    fn test_full_run_finishes_exactly_once() {
        let duration = 2u32;
        let mut countdown = Countdown::new(duration);

        // Every tick but the last keeps counting.
        for _ in 0..duration * 60 - 1 {
            assert_eq!(countdown.tick(), Tick::Counting);
        }
        // The tick that lands on (0, 0) reports the finish.
        assert_eq!(countdown.tick(), Tick::Finished);
        assert_eq!(countdown.minutes(), 0);
        assert_eq!(countdown.seconds(), 0);

        // No re-arming until reconfigured.
        assert_eq!(countdown.tick(), Tick::Spent);
        assert_eq!(countdown.tick(), Tick::Spent);
        assert_eq!(countdown.minutes(), 0);
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_configure_rejects_zero_duration() {
        let mut countdown = Countdown::new(25);
        assert!(!countdown.configure(0));
        assert_eq!(countdown.duration_minutes(), 25);
        assert_eq!(countdown.minutes(), 25);
    }

    #[test]
    fn test_configure_replaces_duration_and_resets() {
        let mut countdown = Countdown::new(25);
        countdown.tick();
        assert!(countdown.configure(10));
        assert_eq!(countdown.minutes(), 10);
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_reset_rearms_after_finish() {
        let mut countdown = Countdown::new(1);
        for _ in 0..60 {
            countdown.tick();
        }
        assert_eq!(countdown.tick(), Tick::Spent);

        countdown.reset();
        assert_eq!(countdown.minutes(), 1);
        assert_eq!(countdown.seconds(), 0);
        assert_eq!(countdown.tick(), Tick::Counting);
    }
}
