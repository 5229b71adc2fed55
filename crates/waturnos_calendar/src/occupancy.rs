// --- File: crates/waturnos_calendar/src/occupancy.rs ---
//! Per-day occupancy aggregation for the dashboard occupancy cards.

use crate::models::{BookingRecord, BookingStatus};
use serde::Serialize;

/// Slot counts for one provider-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOccupancy {
    pub occupied_slots: usize,
    pub free_slots: usize,
    pub total_slots: usize,
    /// Rounded percentage of occupied over total; 0 for an empty day.
    pub occupancy_percent: u32,
}

fn is_occupied(status: &BookingStatus) -> bool {
    matches!(
        status,
        BookingStatus::Reserved | BookingStatus::Completed | BookingStatus::NoShow
    )
}

/// Aggregates one day's bookings into occupancy counts.
pub fn day_occupancy(records: &[BookingRecord]) -> DayOccupancy {
    if records.is_empty() {
        return DayOccupancy::default();
    }

    let occupied_slots = records.iter().filter(|r| is_occupied(&r.status)).count();
    let free_slots = records
        .iter()
        .filter(|r| r.status == BookingStatus::Free)
        .count();
    let total_slots = records.len();
    let occupancy_percent = ((occupied_slots as f64 / total_slots as f64) * 100.0).round() as u32;

    DayOccupancy {
        occupied_slots,
        free_slots,
        total_slots,
        occupancy_percent,
    }
}
