//! Timestamp formatting and parsing
//!
//! Entries store their time as RFC3339 text. Values produced here always use
//! whole seconds and a `Z` suffix, e.g. `2021-04-10T15:00:00Z`.

use crate::error::{EdenError, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Render a UTC time in the stored format
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC3339 timestamp, normalising it to UTC
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| EdenError::InvalidTimestamp(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_format_reference_time() {
        let time = Utc.with_ymd_and_hms(1990, 4, 10, 15, 0, 0).unwrap();
        assert_eq!(format_timestamp(time), "1990-04-10T15:00:00Z");
        assert_eq!(time.format("%H:%M").to_string(), "15:00");
        assert_eq!(time.year(), 1990);
    }

    #[test]
    fn test_format_drops_subseconds() {
        let time = Utc
            .with_ymd_and_hms(2021, 4, 10, 15, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(format_timestamp(time), "2021-04-10T15:00:00Z");
    }

    #[test]
    fn test_parse_utc() {
        let time = parse_timestamp("2021-04-10T15:00:00Z").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2021, 4, 10, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_offset_normalises_to_utc() {
        let time = parse_timestamp("2021-04-10T17:00:00+02:00").unwrap();
        assert_eq!(format_timestamp(time), "2021-04-10T15:00:00Z");
    }

    #[test]
    fn test_parse_invalid() {
        match parse_timestamp("10/04/2021") {
            Err(EdenError::InvalidTimestamp(value)) => assert_eq!(value, "10/04/2021"),
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }
    }
}
