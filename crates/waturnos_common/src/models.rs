// --- File: crates/waturnos_common/src/models.rs ---

// Shared data structures for the WATurnos agenda tools. The booking record
// and its status vocabulary live here because both the transport layer and
// the calendar projection depend on them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking slot.
///
/// The backend schema went through two generations of this vocabulary:
/// `PENDING/CONFIRMED/CANCELLED/COMPLETED` first, then
/// `FREE/RESERVED/CANCELLED/COMPLETED/NO-SHOW`. The canonical internal set
/// is the later one; the earlier names parse as synonyms (`PENDING` means a
/// free slot, `CONFIRMED` a reserved one), so records from either backend
/// generation normalize to the same variants. Strings outside both
/// generations are preserved verbatim in [`BookingStatus::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Free,
    Reserved,
    Cancelled,
    Completed,
    NoShow,
    Unknown(String),
}

impl BookingStatus {
    /// The canonical wire name, used in synthetic event ids.
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Free => "FREE",
            BookingStatus::Reserved => "RESERVED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::NoShow => "NO-SHOW",
            BookingStatus::Unknown(s) => s.as_str(),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            // PENDING is the first-generation name for a free slot
            "FREE" | "PENDING" => BookingStatus::Free,
            // CONFIRMED is the first-generation name for a reserved slot
            "RESERVED" | "CONFIRMED" => BookingStatus::Reserved,
            "CANCELLED" => BookingStatus::Cancelled,
            "COMPLETED" => BookingStatus::Completed,
            "NO-SHOW" | "NO_SHOW" => BookingStatus::NoShow,
            _ => BookingStatus::Unknown(raw),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled or free slot belonging to a service.
///
/// Timestamps are provider-local wall clock. Created server-side when a
/// service's availability is materialized into slots; mutated only by
/// assignment/cancellation calls on the backend, never client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: i64,
    /// Owning service. The range endpoint groups by service, so this is
    /// stamped from the enclosing group when flattening.
    #[serde(default)]
    pub service_id: i64,
    #[serde(default)]
    pub client_id: Option<i64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingRecord {
    /// The `startTime < endTime` invariant. Records violating it are
    /// rejected at the projection boundary.
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_generation_statuses_parse_as_synonyms() {
        assert_eq!(BookingStatus::from("PENDING".to_string()), BookingStatus::Free);
        assert_eq!(
            BookingStatus::from("CONFIRMED".to_string()),
            BookingStatus::Reserved
        );
    }

    #[test]
    fn second_generation_statuses_parse_directly() {
        assert_eq!(BookingStatus::from("FREE".to_string()), BookingStatus::Free);
        assert_eq!(
            BookingStatus::from("NO-SHOW".to_string()),
            BookingStatus::NoShow
        );
        assert_eq!(
            BookingStatus::from("NO_SHOW".to_string()),
            BookingStatus::NoShow
        );
    }

    #[test]
    fn unknown_status_is_preserved_verbatim() {
        let status = BookingStatus::from("BLOCKED".to_string());
        assert_eq!(status, BookingStatus::Unknown("BLOCKED".to_string()));
        assert_eq!(status.as_str(), "BLOCKED");
    }

    #[test]
    fn booking_record_deserializes_from_backend_json() {
        let record: BookingRecord = serde_json::from_str(
            r#"{
                "id": 7,
                "serviceId": 3,
                "startTime": "2024-03-05T09:00:00",
                "endTime": "2024-03-05T09:30:00",
                "status": "CONFIRMED"
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.service_id, 3);
        assert_eq!(record.status, BookingStatus::Reserved);
        assert!(record.is_well_formed());
    }
}
