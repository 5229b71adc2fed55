// --- File: crates/waturnos_calendar/src/projector.rs ---
//! The pure transformation from raw booking records to display-ready
//! calendar events.
//!
//! Two strategies exist, keyed by granularity: the month view aggregates
//! bookings into one all-day event per (day, status) pair carrying a count;
//! the week and day views emit one timed block per booking. Events are
//! derived values, replaced wholesale on every cycle.

use crate::models::{BookingRecord, BookingStatus, CalendarEvent, EventTimes, ViewGranularity};
use crate::range::{format_local_date, format_time_hm};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

/// Neutral fallback for statuses without a color mapping.
const NEUTRAL_GRAY: &str = "#757575";

/// Deterministic status color table.
pub fn status_color(status: &BookingStatus) -> &'static str {
    match status {
        BookingStatus::Free => "#FFA000",      // amarillo
        BookingStatus::Reserved => "#2E7D32",  // verde
        BookingStatus::Cancelled => "#C62828", // rojo
        BookingStatus::Completed => "#1565C0", // azul
        BookingStatus::NoShow | BookingStatus::Unknown(_) => NEUTRAL_GRAY,
    }
}

/// Label templates per status: (singular, plural). Statuses without a
/// template render with an empty title.
fn status_labels(status: &BookingStatus) -> Option<(&'static str, &'static str)> {
    match status {
        BookingStatus::Free => Some(("Libre", "libres")),
        BookingStatus::Reserved => Some(("Confirmado", "confirmados")),
        BookingStatus::Cancelled => Some(("Cancelado", "cancelados")),
        BookingStatus::Completed => Some(("Completado", "completados")),
        BookingStatus::NoShow | BookingStatus::Unknown(_) => None,
    }
}

/// Singular label for an individual (week/day view) event.
pub fn status_title(status: &BookingStatus) -> String {
    status_labels(status)
        .map(|(singular, _)| singular.to_string())
        .unwrap_or_default()
}

/// Pluralized month-view label with the count embedded, e.g. "3 libres".
pub fn aggregate_title(status: &BookingStatus, count: usize) -> String {
    status_labels(status)
        .map(|(_, plural)| format!("{count} {plural}"))
        .unwrap_or_default()
}

/// Projects booking records into calendar events for the given granularity.
///
/// A record violating the `startTime < endTime` invariant poisons the
/// cycle: the whole projection degrades to an empty list rather than
/// rendering a partial or inconsistent calendar.
pub fn project_events(records: &[BookingRecord], granularity: ViewGranularity) -> Vec<CalendarEvent> {
    if let Some(bad) = records.iter().find(|r| !r.is_well_formed()) {
        warn!(
            booking_id = bad.id,
            "Malformed booking (startTime >= endTime), dropping projection cycle"
        );
        return Vec::new();
    }

    if granularity.is_aggregate() {
        project_month(records)
    } else {
        project_individual(records)
    }
}

/// One all-day event per (day, status) pair present, with counts.
fn project_month(records: &[BookingRecord]) -> Vec<CalendarEvent> {
    // BTreeMaps keep the output deterministic; the rendering layer handles
    // visual stacking within a day.
    let mut grouped: BTreeMap<String, BTreeMap<String, (BookingStatus, usize)>> = BTreeMap::new();
    for record in records {
        let day = format_local_date(&record.start_time);
        let per_status = grouped.entry(day).or_default();
        per_status
            .entry(record.status.as_str().to_string())
            .or_insert_with(|| (record.status.clone(), 0))
            .1 += 1;
    }

    grouped
        .into_iter()
        .flat_map(|(day, statuses)| {
            // Day keys come from format_local_date, so this parse is total.
            let start = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .expect("day key is canonical")
                .and_hms_opt(0, 0, 0)
                .expect("midnight exists");
            statuses
                .into_iter()
                .map(move |(status_key, (status, count))| CalendarEvent {
                    id: format!("{day}-{status_key}"),
                    title: aggregate_title(&status, count),
                    start,
                    end: None,
                    all_day: true,
                    color: status_color(&status),
                    times: None,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// One timed event per booking record, start/end copied verbatim.
fn project_individual(records: &[BookingRecord]) -> Vec<CalendarEvent> {
    records
        .iter()
        .map(|record| CalendarEvent {
            id: record.id.to_string(),
            title: status_title(&record.status),
            start: record.start_time,
            end: Some(record.end_time),
            all_day: false,
            color: status_color(&record.status),
            times: Some(EventTimes {
                start_label: format_time_hm(&record.start_time),
                end_label: format_time_hm(&record.end_time),
            }),
        })
        .collect()
}
