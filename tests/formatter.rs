#[cfg(test)]
mod tests {
    use pomodo::libs::formatter::{format_clock, format_millis, format_millis_precise};

    #[test]
    fn test_format_millis_rounds_to_minutes() {
        assert_eq!(format_millis(0), "00:00");
        assert_eq!(format_millis(90 * 60 * 1000), "01:30");
        assert_eq!(format_millis(-5_000), "00:00");
    }

    #[test]
    fn test_format_millis_precise_keeps_sub_minute_credit() {
        // A 42-second credit must not render as zero in the toggle
        // confirmation.
        assert_eq!(format_millis_precise(42_000), "00:00:42");
        assert_eq!(format_millis_precise(3_723_000), "01:02:03");
        assert_eq!(format_millis_precise(0), "00:00:00");
        assert_eq!(format_millis_precise(-5_000), "00:00:00");
    }

    #[test]
    fn test_format_clock_pads_both_fields() {
        assert_eq!(format_clock(25, 0), "25:00");
        assert_eq!(format_clock(3, 7), "03:07");
    }
}
