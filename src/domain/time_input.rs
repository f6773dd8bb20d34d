//! Timestamp inputs and ISO-8601 resolution
//!
//! Public entry points accept either a structured date-time or raw text;
//! both are resolved to a `NaiveDateTime` at the boundary.

use crate::error::{HabitrError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Round-trip timestamp format. `%.f` prints nothing when the fractional
/// part is zero, matching the canonical ISO-8601 strings in storage.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A timestamp supplied by a caller, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    /// An already-structured date-time
    Timestamp(NaiveDateTime),
    /// Raw text to be parsed as ISO-8601
    Text(String),
}

impl TimeInput {
    /// Resolve to a concrete date-time, parsing textual input
    pub fn resolve(self) -> Result<NaiveDateTime> {
        match self {
            TimeInput::Timestamp(timestamp) => Ok(timestamp),
            TimeInput::Text(text) => match parse_iso(&text) {
                Some(timestamp) => Ok(timestamp),
                None => Err(HabitrError::InvalidTimestamp(text)),
            },
        }
    }
}

impl From<NaiveDateTime> for TimeInput {
    fn from(timestamp: NaiveDateTime) -> Self {
        TimeInput::Timestamp(timestamp)
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        TimeInput::Text(text.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        TimeInput::Text(text)
    }
}

/// The current moment as a naive local date-time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a timestamp in the canonical round-trip form
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an ISO-8601 date-time. Accepts `T` or space separators and a
/// bare date, which resolves to midnight.
pub(crate) fn parse_iso(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT) {
        return Some(timestamp);
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(timestamp);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_resolve_structured_passthrough() {
        let timestamp = datetime(2024, 1, 1, 8, 30, 0);
        let resolved = TimeInput::Timestamp(timestamp).resolve().unwrap();
        assert_eq!(resolved, timestamp);
    }

    #[test]
    fn test_resolve_full_datetime_text() {
        let resolved = TimeInput::from("2024-01-01T08:30:00").resolve().unwrap();
        assert_eq!(resolved, datetime(2024, 1, 1, 8, 30, 0));
    }

    #[test]
    fn test_resolve_space_separated_text() {
        let resolved = TimeInput::from("2024-01-01 08:30:00").resolve().unwrap();
        assert_eq!(resolved, datetime(2024, 1, 1, 8, 30, 0));
    }

    #[test]
    fn test_resolve_bare_date_is_midnight() {
        let resolved = TimeInput::from("2024-01-01").resolve().unwrap();
        assert_eq!(resolved, datetime(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_resolve_fractional_seconds() {
        use chrono::Timelike;

        let resolved = TimeInput::from("2024-01-01T08:30:00.250").resolve().unwrap();
        assert_eq!(resolved.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_resolve_invalid_text() {
        let result = TimeInput::from("not-a-date").resolve();
        match result.unwrap_err() {
            HabitrError::InvalidTimestamp(text) => assert_eq!(text, "not-a-date"),
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }

        assert!(TimeInput::from("2024-13-01").resolve().is_err());
        assert!(TimeInput::from("2024-01-32").resolve().is_err());
        assert!(TimeInput::from("").resolve().is_err());
    }

    #[test]
    fn test_format_without_fraction() {
        let formatted = format_timestamp(datetime(2024, 1, 1, 8, 30, 0));
        assert_eq!(formatted, "2024-01-01T08:30:00");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let original = datetime(2024, 6, 15, 23, 59, 59);
        let reparsed = parse_iso(&format_timestamp(original)).unwrap();
        assert_eq!(reparsed, original);
    }
}
