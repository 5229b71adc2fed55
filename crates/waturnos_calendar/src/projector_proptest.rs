// --- File: crates/waturnos_calendar/src/projector_proptest.rs ---
#[cfg(test)]
mod tests {
    use crate::models::{BookingRecord, BookingStatus, ViewGranularity};
    use crate::projector::project_events;
    use crate::range::format_local_date;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn arb_status() -> impl Strategy<Value = BookingStatus> {
        prop_oneof![
            Just(BookingStatus::Free),
            Just(BookingStatus::Reserved),
            Just(BookingStatus::Cancelled),
            Just(BookingStatus::Completed),
            Just(BookingStatus::NoShow),
        ]
    }

    fn arb_record() -> impl Strategy<Value = BookingRecord> {
        (1i64..10_000, 0i64..28, 0u32..23, 0u32..4, arb_status()).prop_map(
            |(id, day_offset, hour, quarter, status)| {
                let start = (NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
                    + Duration::days(day_offset))
                .and_hms_opt(hour, quarter * 15, 0)
                .unwrap();
                BookingRecord {
                    id,
                    service_id: 1,
                    client_id: None,
                    start_time: start,
                    end_time: start + Duration::minutes(30),
                    status,
                    notes: None,
                }
            },
        )
    }

    proptest! {
        // Same wall-clock day, any two times of day: same canonical key
        #[test]
        fn format_is_stable_across_times_of_day(
            day_offset in 0i64..365,
            h1 in 0u32..24, m1 in 0u32..60,
            h2 in 0u32..24, m2 in 0u32..60,
        ) {
            let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day_offset);
            let d1 = day.and_hms_opt(h1, m1, 0).unwrap();
            let d2 = day.and_hms_opt(h2, m2, 0).unwrap();
            prop_assert_eq!(format_local_date(&d1), format_local_date(&d2));
        }

        // Month projection day keys are exactly the distinct day keys of
        // the input records
        #[test]
        fn month_day_keys_round_trip(records in prop::collection::vec(arb_record(), 0..40)) {
            let events = project_events(&records, ViewGranularity::Month);

            let expected: BTreeSet<String> =
                records.iter().map(|r| format_local_date(&r.start_time)).collect();
            // Synthetic ids are "{YYYY-MM-DD}-{STATUS}"
            let actual: BTreeSet<String> =
                events.iter().map(|e| e.id[..10].to_string()).collect();

            prop_assert_eq!(actual, expected);
        }

        // Week/day projection is one event per record, ids preserved
        #[test]
        fn individual_projection_preserves_records(
            records in prop::collection::vec(arb_record(), 0..40),
        ) {
            let events = project_events(&records, ViewGranularity::Day);
            prop_assert_eq!(events.len(), records.len());
            for (event, record) in events.iter().zip(&records) {
                prop_assert_eq!(&event.id, &record.id.to_string());
                prop_assert_eq!(event.start, record.start_time);
                prop_assert_eq!(event.end, Some(record.end_time));
            }
        }

        // Month counts embedded in titles sum to the record count for
        // statuses that have a label template
        #[test]
        fn month_event_count_bounded_by_day_status_pairs(
            records in prop::collection::vec(arb_record(), 0..40),
        ) {
            let events = project_events(&records, ViewGranularity::Month);
            let pairs: BTreeSet<(String, String)> = records
                .iter()
                .map(|r| (format_local_date(&r.start_time), r.status.as_str().to_string()))
                .collect();
            prop_assert_eq!(events.len(), pairs.len());
        }
    }
}
