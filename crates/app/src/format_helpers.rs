//! Date labels for case cards and case details.
//!
//! Inputs are ISO-8601 strings (e.g. "2025-12-15T09:00:00"). Timestamps
//! with an offset are shown on their local calendar day; bare dates and
//! offset-free timestamps keep the date as written.

use gateway::format::parse_timestamp;
use shared_types::NOT_AVAILABLE;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date as short month and day, e.g. "Dec 15".
///
/// `None` when the string does not start with `YYYY-MM-DD`.
pub fn format_month_day(date_str: &str) -> Option<String> {
    if let Some(local) = parse_timestamp(date_str) {
        return Some(local.format("%b %-d").to_string());
    }
    let month = parse_month(date_str.get(5..7)?)?;
    let day = date_str
        .get(8..10)?
        .parse::<u32>()
        .ok()
        .filter(|d| (1..=31).contains(d))?;
    Some(format!("{} {}", MONTH_NAMES[month - 1], day))
}

/// Text for the "Due:" line, which is shown even without a deadline.
pub fn format_due(deadline: Option<&str>) -> String {
    deadline
        .and_then(format_month_day)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_from_timestamp() {
        assert_eq!(format_month_day("2025-12-15T09:00:00").as_deref(), Some("Dec 15"));
        assert_eq!(format_month_day("2026-01-05").as_deref(), Some("Jan 5"));
    }

    #[test]
    fn offset_timestamps_use_the_local_day() {
        use chrono::{DateTime, Local};

        for raw in ["2025-12-15T23:30:00Z", "2025-12-15T00:30:00-08:00"] {
            let local = DateTime::parse_from_rfc3339(raw)
                .unwrap()
                .with_timezone(&Local)
                .format("%b %-d")
                .to_string();
            assert_eq!(format_month_day(raw), Some(local));
        }
    }

    #[test]
    fn malformed_dates_are_none() {
        assert!(format_month_day("").is_none());
        assert!(format_month_day("2025-13-01").is_none());
        assert!(format_month_day("2025-12-00").is_none());
        assert!(format_month_day("next tuesday").is_none());
        assert!(format_month_day("2025-é1-01").is_none());
    }

    #[test]
    fn due_line_never_empty() {
        assert_eq!(format_due(Some("2025-12-20T17:00:00")), "Dec 20");
        assert_eq!(format_due(None), "N/A");
        assert_eq!(format_due(Some("soon")), "N/A");
    }
}
