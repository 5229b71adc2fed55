// --- File: crates/waturnos_calendar/src/gate.rs ---
//! Rate-limiting state machine for the fetch pipeline.
//!
//! The rendering layer fires visible-range signals arbitrarily fast during
//! drag/zoom. The gate runs each signal through three checks:
//!
//! 1. **Debounce** ([`FetchGate::settle`]): a signal only proceeds after the
//!    quiet interval passes with no later signal, so only the last range in
//!    a burst is fetched.
//! 2. **De-duplication** ([`FetchGate::begin`]): while a fetch for an exact
//!    [`FetchKey`] is in flight, an identical request is suppressed. The
//!    in-flight marker clears when the guard drops, on success and failure
//!    alike, so a failed fetch never blocks retries. Distinct keys are
//!    never suppressed.
//! 3. **Staleness** ([`FetchGate::issue`] / [`FetchGate::is_current`]):
//!    every fetch carries a monotonically increasing sequence number; a
//!    completed fetch whose number is no longer the latest issued is
//!    discarded instead of overwriting fresher state.
//!
//! Per signal the gate moves Idle -> Pending(quiet timer) -> InFlight(key)
//! -> Idle; superseded signals fall back to Idle from Pending.

use crate::models::FetchKey;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Quiet interval used when none is configured.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(150);

#[derive(Debug)]
pub struct FetchGate {
    quiet: Duration,
    /// Bumped on every range-change signal; a sleeper that wakes to a
    /// different value was superseded.
    generation: AtomicU64,
    /// Latest issued fetch sequence, for the stale-response guard.
    sequence: AtomicU64,
    in_flight: Mutex<HashSet<FetchKey>>,
}

impl FetchGate {
    pub fn new(quiet: Duration) -> Self {
        FetchGate {
            quiet,
            generation: AtomicU64::new(0),
            sequence: AtomicU64::new(0),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Debounce: waits out the quiet interval and reports whether this
    /// signal is still the most recent one. Callers abandon the pipeline
    /// when this returns `false`.
    pub async fn settle(&self) -> bool {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;
        my_generation == self.generation.load(Ordering::SeqCst)
    }

    /// De-duplication: claims the key for an in-flight fetch. Returns
    /// `None` when an identical fetch is already running. The returned
    /// guard releases the key on drop.
    pub fn begin(&self, key: FetchKey) -> Option<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().expect("in-flight set poisoned");
        if !in_flight.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard { gate: self, key })
    }

    /// Issues the next fetch sequence number.
    pub fn issue(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `seq` is still the latest issued fetch. A `false` answer
    /// means a newer fetch superseded this one and its result is stale.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.sequence.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn in_flight_len(&self) -> usize {
        self.in_flight.lock().expect("in-flight set poisoned").len()
    }
}

impl Default for FetchGate {
    fn default() -> Self {
        FetchGate::new(DEFAULT_QUIET)
    }
}

/// Releases the claimed [`FetchKey`] when dropped, unconditionally, so the
/// marker clears whether the fetch settled with success or failure.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    gate: &'a FetchGate,
    key: FetchKey,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self
            .gate
            .in_flight
            .lock()
            .expect("in-flight set poisoned");
        in_flight.remove(&self.key);
    }
}
