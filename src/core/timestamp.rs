//! Timestamp rendering for log lines
//!
//! Lines carry local wall-clock time at second resolution:
//! `2025-01-08 10:30:45`.

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern used for every emitted line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `datetime` as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, rendered for a log line.
#[must_use]
pub fn now() -> String {
    format_timestamp(&Local::now())
}
