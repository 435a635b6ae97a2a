//! Time formatting helpers for countdown display and summaries.
//!
//! Durations render as "HH:MM" in reports and the countdown renders as
//! "MM:SS". Negative durations are treated as zero; formatting never fails.

use chrono::Duration;

/// Formats a duration as "HH:MM", clamping negatives to "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Formats an accumulated completion time in milliseconds as "HH:MM".
pub fn format_millis(millis: i64) -> String {
    format_duration(&Duration::milliseconds(millis.max(0)))
}

/// Formats an accumulated completion time in milliseconds as "HH:MM:SS".
///
/// Toggle confirmations use this so sub-minute credits stay visible; the
/// report tables keep the coarser "HH:MM".
pub fn format_millis_precise(millis: i64) -> String {
    let total_seconds = Duration::milliseconds(millis.max(0)).num_seconds();
    format!("{:02}:{:02}:{:02}", total_seconds / 3600, (total_seconds % 3600) / 60, total_seconds % 60)
}

/// Formats the remaining countdown as "MM:SS".
pub fn format_clock(minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}
