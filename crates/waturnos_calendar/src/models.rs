// --- File: crates/waturnos_calendar/src/models.rs ---
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use waturnos_common::models::{BookingRecord, BookingStatus};

/// The calendar display mode. Month aggregates bookings per day and status;
/// week and day render each booking as an individual timed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewGranularity {
    Month,
    Week,
    Day,
}

impl ViewGranularity {
    /// Whether this view uses the aggregated counts-per-day projection.
    pub fn is_aggregate(self) -> bool {
        matches!(self, ViewGranularity::Month)
    }

    /// Parse a configuration name ("month", "week", "day").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "month" => Some(ViewGranularity::Month),
            "week" => Some(ViewGranularity::Week),
            "day" => Some(ViewGranularity::Day),
            _ => None,
        }
    }
}

impl fmt::Display for ViewGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewGranularity::Month => "month",
            ViewGranularity::Week => "week",
            ViewGranularity::Day => "day",
        };
        f.write_str(name)
    }
}

/// Pre-formatted local start/end time labels (24-hour `HH:MM`), computed
/// once at projection time so the rendering layer never reformats dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTimes {
    pub start_label: String,
    pub end_label: String,
}

/// A view-model object derived from one or more booking records.
///
/// Fully ephemeral: recomputed on every fetch or view-mode change and
/// replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Booking id in week/day view; synthetic `{day}-{STATUS}` in month view.
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    /// Deterministic status color; unmapped statuses get neutral gray.
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<EventTimes>,
}

/// Composite identity of a data request, used to suppress duplicate
/// concurrent fetches. `range` is `None` for the single-day "today" fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub provider_id: i64,
    pub range: Option<(String, String)>,
}

impl FetchKey {
    pub fn today(provider_id: i64) -> Self {
        FetchKey {
            provider_id,
            range: None,
        }
    }

    pub fn range(provider_id: i64, start_date: &str, end_date: &str) -> Self {
        FetchKey {
            provider_id,
            range: Some((start_date.to_string(), end_date.to_string())),
        }
    }
}

/// The visible window reported by the rendering layer when the user
/// navigates or toggles the view.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRange {
    pub view: ViewGranularity,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
