// --- File: crates/services/waturnos_agenda/src/factory.rs ---
//! Wires the session, the REST client and the calendar controller from the
//! loaded configuration. Keeping construction in one place keeps the
//! dependency graph explicit: everything downstream receives its
//! collaborators by handle.

use std::sync::Arc;
use std::time::Duration;
use waturnos_calendar::controller::CalendarController;
use waturnos_calendar::fetcher::BookingApiClient;
use waturnos_calendar::models::ViewGranularity;
use waturnos_common::error::{internal_error, WaturnosError};
use waturnos_common::session::{Session, SessionState};
use waturnos_config::AppConfig;

pub struct AgendaFactory {
    config: Arc<AppConfig>,
    session: Session,
    booking_service: Arc<BookingApiClient>,
}

impl AgendaFactory {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, WaturnosError> {
        let session = Session::new(SessionState {
            provider_id: config.provider.default_provider_id,
            token: waturnos_config::api_token(),
            expired: false,
        });
        let booking_service = Arc::new(
            BookingApiClient::from_config(&config, session.clone()).map_err(internal_error)?,
        );
        Ok(AgendaFactory {
            config,
            session,
            booking_service,
        })
    }

    pub fn session(&self) -> Session {
        self.session.clone()
    }

    pub fn booking_service(&self) -> Arc<BookingApiClient> {
        self.booking_service.clone()
    }

    /// Builds a calendar controller. `granularity` overrides the configured
    /// initial view when given.
    pub fn calendar_controller(
        &self,
        granularity: Option<ViewGranularity>,
    ) -> CalendarController<BookingApiClient> {
        let initial = granularity
            .or_else(|| ViewGranularity::from_name(&self.config.calendar.initial_granularity))
            .unwrap_or(ViewGranularity::Month);
        CalendarController::new(
            self.booking_service.clone(),
            self.session.clone(),
            initial,
            Duration::from_millis(self.config.calendar.quiet_ms),
        )
    }
}
