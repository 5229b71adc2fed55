// --- File: crates/waturnos_calendar/src/gate_test.rs ---
#[cfg(test)]
mod tests {
    use crate::gate::FetchGate;
    use crate::models::FetchKey;
    use std::sync::Arc;
    use std::time::Duration;

    const QUIET: Duration = Duration::from_millis(150);

    #[tokio::test(start_paused = true)]
    async fn lone_signal_settles() {
        let gate = FetchGate::new(QUIET);
        assert!(gate.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_signals_collapses_to_the_last_one() {
        let gate = Arc::new(FetchGate::new(QUIET));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let gate = gate.clone();
            handles.push(tokio::spawn(async move { gate.settle().await }));
            // Signals arrive well inside the quiet window
            tokio::time::advance(Duration::from_millis(10)).await;
        }

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.unwrap());
        }

        assert_eq!(
            outcomes,
            vec![false, false, false, false, true],
            "only the last signal of the burst may proceed"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_signals_each_settle() {
        let gate = FetchGate::new(QUIET);
        assert!(gate.settle().await);
        assert!(gate.settle().await);
    }

    #[test]
    fn identical_in_flight_key_is_suppressed() {
        let gate = FetchGate::default();
        let key = FetchKey::range(1, "2024-03-01", "2024-03-31");

        let guard = gate.begin(key.clone());
        assert!(guard.is_some());
        assert!(gate.begin(key.clone()).is_none());

        drop(guard);
        assert!(gate.begin(key).is_some(), "settled fetch frees the key");
    }

    #[test]
    fn distinct_keys_are_not_suppressed() {
        let gate = FetchGate::default();
        let march = FetchKey::range(1, "2024-03-01", "2024-03-31");
        let april = FetchKey::range(1, "2024-04-01", "2024-04-30");

        let _first = gate.begin(march).unwrap();
        let _second = gate.begin(april);
        assert!(_second.is_some());
        assert_eq!(gate.in_flight_len(), 2);
    }

    #[test]
    fn today_and_range_keys_for_one_provider_differ() {
        let gate = FetchGate::default();
        let _today = gate.begin(FetchKey::today(1)).unwrap();
        assert!(gate
            .begin(FetchKey::range(1, "2024-03-01", "2024-03-31"))
            .is_some());
    }

    #[test]
    fn guard_clears_the_marker_on_failure_paths_too() {
        let gate = FetchGate::default();
        let key = FetchKey::today(9);
        {
            let _guard = gate.begin(key.clone()).unwrap();
            // A failed fetch unwinds through the same drop
        }
        assert_eq!(gate.in_flight_len(), 0);
        assert!(gate.begin(key).is_some());
    }

    #[test]
    fn only_the_latest_issued_sequence_is_current() {
        let gate = FetchGate::default();
        let first = gate.issue();
        assert!(gate.is_current(first));

        let second = gate.issue();
        assert!(!gate.is_current(first), "superseded fetch must be stale");
        assert!(gate.is_current(second));
    }
}
