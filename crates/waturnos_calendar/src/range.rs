// --- File: crates/waturnos_calendar/src/range.rs ---
//! Canonical calendar-day keys and booking timestamp parsing.
//!
//! Day keys are produced from wall-clock date components, never from UTC,
//! so a booking at 23:30 does not shift into the next day when the viewer's
//! offset differs from the provider's.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use thiserror::Error;

/// Time zone used to interpret offset-carrying timestamps when the
/// provider does not configure one.
pub const DEFAULT_TIME_ZONE: Tz = Tz::America__Argentina__Buenos_Aires;

#[derive(Error, Debug)]
#[error("Failed to parse time: {0}")]
pub struct TimeParseError(pub String);

/// Formats a timestamp as a canonical zero-padded `YYYY-MM-DD` key from its
/// local date components. Pure; any two timestamps on the same wall-clock
/// calendar day yield the same string.
pub fn format_local_date(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Formats a timestamp as a 24-hour `HH:MM` label for event display.
pub fn format_time_hm(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// Resolves the provider display time zone from its configured name.
pub fn display_zone(name: Option<&str>) -> Tz {
    name.and_then(|n| n.parse::<Tz>().ok())
        .unwrap_or(DEFAULT_TIME_ZONE)
}

/// Parses a booking timestamp into provider-local wall clock.
///
/// The backend has emitted both naive local timestamps
/// (`2024-03-05T09:00:00`) and RFC 3339 timestamps with an offset. Naive
/// input is taken as already provider-local; offset-carrying input is
/// converted into `zone` before the offset is dropped.
pub fn parse_booking_time(raw: &str, zone: &Tz) -> Result<NaiveDateTime, TimeParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(zone).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|e| TimeParseError(format!("{raw}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn same_calendar_day_yields_same_key() {
        assert_eq!(
            format_local_date(&local(2024, 3, 5, 0, 0)),
            format_local_date(&local(2024, 3, 5, 23, 59))
        );
    }

    #[test]
    fn day_key_is_zero_padded() {
        assert_eq!(format_local_date(&local(2024, 3, 5, 9, 0)), "2024-03-05");
    }

    #[test]
    fn naive_timestamps_are_taken_as_local() {
        let parsed = parse_booking_time("2024-03-05T09:00:00", &DEFAULT_TIME_ZONE).unwrap();
        assert_eq!(parsed, local(2024, 3, 5, 9, 0));
    }

    #[test]
    fn rfc3339_timestamps_are_converted_to_the_display_zone() {
        // 12:00 UTC is 09:00 in Buenos Aires (UTC-3, no DST)
        let parsed = parse_booking_time("2024-03-05T12:00:00Z", &DEFAULT_TIME_ZONE).unwrap();
        assert_eq!(parsed, local(2024, 3, 5, 9, 0));
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(parse_booking_time("not-a-time", &DEFAULT_TIME_ZONE).is_err());
    }

    #[test]
    fn time_labels_are_24_hour() {
        assert_eq!(format_time_hm(&local(2024, 3, 5, 15, 5)), "15:05");
    }
}
