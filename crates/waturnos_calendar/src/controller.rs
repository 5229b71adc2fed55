// --- File: crates/waturnos_calendar/src/controller.rs ---
//! The view controller: owns the active granularity, reacts to
//! visible-range changes from the rendering layer, and runs the
//! debounce -> de-duplicate -> fetch -> project pipeline.
//!
//! The event list is published through a watch channel and always replaced
//! wholesale; subscribers never observe a partially updated calendar.

use crate::fetcher::load_bookings;
use crate::gate::FetchGate;
use crate::models::{BookingRecord, CalendarEvent, FetchKey, ViewGranularity, VisibleRange};
use crate::projector::project_events;
use crate::range::format_local_date;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;
use waturnos_common::services::BookingService;
use waturnos_common::session::Session;

struct ControllerState {
    granularity: ViewGranularity,
    /// Last fetched records, kept so a granularity toggle can re-project
    /// without refetching.
    records: Vec<BookingRecord>,
}

pub struct CalendarController<S: BookingService> {
    service: Arc<S>,
    session: Session,
    gate: FetchGate,
    state: Mutex<ControllerState>,
    events_tx: watch::Sender<Vec<CalendarEvent>>,
}

impl<S: BookingService> CalendarController<S> {
    pub fn new(
        service: Arc<S>,
        session: Session,
        initial_granularity: ViewGranularity,
        quiet: Duration,
    ) -> Self {
        let (events_tx, _rx) = watch::channel(Vec::new());
        CalendarController {
            service,
            session,
            gate: FetchGate::new(quiet),
            state: Mutex::new(ControllerState {
                granularity: initial_granularity,
                records: Vec::new(),
            }),
            events_tx,
        }
    }

    pub fn granularity(&self) -> ViewGranularity {
        self.state.lock().expect("controller state poisoned").granularity
    }

    /// Current event list, by value.
    pub fn events(&self) -> Vec<CalendarEvent> {
        self.events_tx.borrow().clone()
    }

    /// Last fetched records, by value (for occupancy summaries and the like).
    pub fn records(&self) -> Vec<BookingRecord> {
        self.state
            .lock()
            .expect("controller state poisoned")
            .records
            .clone()
    }

    /// Subscribe to event-list replacements. This is the rendering layer's
    /// side of the contract: it renders whatever arrives here.
    pub fn subscribe_events(&self) -> watch::Receiver<Vec<CalendarEvent>> {
        self.events_tx.subscribe()
    }

    /// Handles a "visible dates changed" signal from the rendering layer.
    ///
    /// Updates the granularity, canonicalizes the window, then runs the
    /// gated pipeline: debounce (only the last signal in a burst
    /// proceeds), de-duplicate (an identical in-flight key suppresses the
    /// fetch), fetch, stale-check, project, replace.
    pub async fn on_dates_set(&self, range: VisibleRange) {
        {
            let mut state = self.state.lock().expect("controller state poisoned");
            state.granularity = range.view;
        }

        let Some(provider_id) = self.session.provider_id() else {
            // No provider selected: clear silently, fetch nothing.
            self.clear();
            return;
        };

        let start_date = format_local_date(&range.start);
        let end_date = format_local_date(&range.end);

        if !self.gate.settle().await {
            return;
        }
        let key = FetchKey::range(provider_id, &start_date, &end_date);
        let Some(_guard) = self.gate.begin(key) else {
            return;
        };
        let seq = self.gate.issue();

        let records = load_bookings(
            self.service.as_ref(),
            provider_id,
            Some((start_date.as_str(), end_date.as_str())),
        )
        .await;

        if !self.gate.is_current(seq) {
            debug!(seq, "Discarding stale fetch result");
            return;
        }
        self.apply(records);
    }

    /// Fetches today's bookings outside the debounced path (initial load
    /// and explicit refresh).
    pub async fn refresh(&self) {
        let Some(provider_id) = self.session.provider_id() else {
            self.clear();
            return;
        };

        let Some(_guard) = self.gate.begin(FetchKey::today(provider_id)) else {
            return;
        };
        let seq = self.gate.issue();

        let records = load_bookings(self.service.as_ref(), provider_id, None).await;

        if !self.gate.is_current(seq) {
            debug!(seq, "Discarding stale fetch result");
            return;
        }
        self.apply(records);
    }

    /// Manual granularity toggle. Re-projects the cached records
    /// immediately and returns the new granularity: state alone does not
    /// re-render an external calendar widget, so the caller must instruct
    /// the rendering layer to switch view imperatively.
    #[must_use = "the rendering layer must be told to switch view"]
    pub fn set_granularity(&self, granularity: ViewGranularity) -> ViewGranularity {
        let events = {
            let mut state = self.state.lock().expect("controller state poisoned");
            if state.granularity == granularity {
                return granularity;
            }
            state.granularity = granularity;
            project_events(&state.records, granularity)
        };
        self.events_tx.send_replace(events);
        granularity
    }

    /// Replaces the record cache and the published event list wholesale.
    fn apply(&self, records: Vec<BookingRecord>) {
        let events = {
            let mut state = self.state.lock().expect("controller state poisoned");
            state.records = records;
            project_events(&state.records, state.granularity)
        };
        self.events_tx.send_replace(events);
    }

    fn clear(&self) {
        {
            let mut state = self.state.lock().expect("controller state poisoned");
            state.records.clear();
        }
        self.events_tx.send_replace(Vec::new());
    }
}
