//! Clock and timecode formatting.

use chrono::{DateTime, Utc};

/// Format a cursor instant for the clock display.
pub fn format_clock(t: DateTime<Utc>) -> String {
    t.format("%a %b %d %Y %H:%M:%S UTC").to_string()
}

/// Format a duration in seconds to MM:SS format.
pub fn format_timecode(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
