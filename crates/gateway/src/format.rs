//! Timestamp labels produced while normalizing backend records.
//!
//! The backend emits ISO-8601 timestamps, usually without an offset
//! (`2025-12-12T10:00:00`). Those are read as local wall-clock time, the way
//! a browser reads them; timestamps with an offset are converted to local
//! time first.

use chrono::{DateTime, Local, NaiveDateTime};

/// Parse a backend timestamp into local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Format a timestamp as a two-digit 12-hour time, e.g. "09:05 AM".
pub fn time_of_day(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%I:%M %p").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_timestamp_keeps_wall_clock() {
        assert_eq!(time_of_day("2025-12-12T10:00:00").as_deref(), Some("10:00 AM"));
        assert_eq!(time_of_day("2025-12-15T14:30:00").as_deref(), Some("02:30 PM"));
    }

    #[test]
    fn fractional_seconds_are_accepted() {
        assert_eq!(
            time_of_day("2025-12-01T09:05:12.345678").as_deref(),
            Some("09:05 AM")
        );
    }

    #[test]
    fn minutes_only_is_accepted() {
        assert_eq!(time_of_day("2025-12-01T23:59").as_deref(), Some("11:59 PM"));
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(time_of_day("2025-12-01T00:00:00").as_deref(), Some("12:00 AM"));
        assert_eq!(time_of_day("2025-12-01T12:00:00").as_deref(), Some("12:00 PM"));
    }

    #[test]
    fn garbage_is_none() {
        assert!(time_of_day("yesterday").is_none());
        assert!(time_of_day("").is_none());
    }

    #[test]
    fn offset_timestamp_parses() {
        assert!(parse_timestamp("2025-12-01T09:00:00Z").is_some());
        assert!(parse_timestamp("2025-12-01T09:00:00+02:00").is_some());
    }
}
