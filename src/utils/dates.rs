//! Timestamp display helpers.
//!
//! The API returns RFC 3339 timestamps; the UI shows them in local time.
//! Values that cannot be parsed are shown unchanged.

use chrono::{DateTime, Local};

fn parse_local(timestamp: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Format a timestamp as a local date, e.g. "Mar 1, 2024".
///
pub fn format_date(timestamp: &str) -> String {
    match parse_local(timestamp) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => timestamp.to_string(),
    }
}

/// Format a timestamp as a local date and time, e.g. "Mar 1, 2024 10:00".
///
pub fn format_date_time(timestamp: &str) -> String {
    match parse_local(timestamp) {
        Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        None => timestamp.to_string(),
    }
}
