//! Formatting utilities for dates and data sizes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ConfigError;

/// Display pattern: `Sep 9, 2024 | 10:30:00 AM`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y | %I:%M:%S %p";

/// Offset-less date-time layouts, interpreted as UTC.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Resolve an IANA time zone name (e.g. `"UTC"`, `"Asia/Seoul"`).
pub fn resolve_time_zone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimeZone(name.to_string()))
}

/// Parse a timestamp string into UTC.
///
/// Accepts RFC 3339, RFC 2822, offset-less ISO date-times (UTC) and bare
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp for display in `time_zone`.
///
/// Returns an empty string for a missing or unparseable timestamp. An unknown
/// time zone falls back to UTC.
pub fn format_date(timestamp: Option<&str>, time_zone: &str) -> String {
    match timestamp.and_then(parse_timestamp) {
        Some(dt) => format_date_time(dt, time_zone),
        None => String::new(),
    }
}

/// Format an already-parsed instant for display in `time_zone`.
pub fn format_date_time(dt: DateTime<Utc>, time_zone: &str) -> String {
    let tz = resolve_time_zone(time_zone).unwrap_or_else(|err| {
        log::warn!("{err}, falling back to UTC");
        Tz::UTC
    });
    dt.with_timezone(&tz).format(DISPLAY_FORMAT).to_string()
}

/// Format a byte count with 1024-based units (e.g., "2.00 KB", "1.50 MB").
///
/// Sizes below one megabyte are always shown in KB, so 512 bytes is "0.50 KB".
pub fn format_data_size(bytes: u64, decimal_places: usize) -> String {
    let kilobytes = bytes as f64 / 1024.0;
    let megabytes = kilobytes / 1024.0;

    if kilobytes < 1024.0 {
        format!("{kilobytes:.decimal_places$} KB")
    } else if megabytes < 1024.0 {
        format!("{megabytes:.decimal_places$} MB")
    } else {
        format!("{:.decimal_places$} GB", megabytes / 1024.0)
    }
}
