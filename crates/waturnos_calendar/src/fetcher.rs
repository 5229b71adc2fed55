// --- File: crates/waturnos_calendar/src/fetcher.rs ---
//! REST transport for booking records.
//!
//! Two endpoints exist on the backend: a single-day "today" endpoint that
//! returns a flat list, and a range endpoint that returns bookings grouped
//! first by calendar-day key, then by service. Both are normalized here
//! into a uniform `Vec<BookingRecord>`.

use crate::models::{BookingRecord, BookingStatus};
use crate::range::{display_zone, parse_booking_time};
use chrono_tz::Tz;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{error, warn};
use waturnos_common::http::{create_client, join_url, HTTP_CLIENT};
use waturnos_common::services::{BookingService, BoxFuture};
use waturnos_common::session::Session;
use waturnos_config::AppConfig;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend rejected the session token")]
    Unauthorized,
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

// --- Wire types ---

/// A booking as the backend serializes it. Timestamps stay strings here
/// because the backend has emitted both naive local and RFC 3339 forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i64,
    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default)]
    pub client_id: Option<i64>,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The today endpoint answers either a bare array or `{"data": [...]}`
/// depending on backend version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TodayResponse {
    Wrapped { data: Vec<BookingDto> },
    Flat(Vec<BookingDto>),
}

impl TodayResponse {
    pub(crate) fn into_bookings(self) -> Vec<BookingDto> {
        match self {
            TodayResponse::Wrapped { data } => data,
            TodayResponse::Flat(list) => list,
        }
    }
}

/// One service's bookings within a day group of the range response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDayGroup {
    pub service_id: i64,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub bookings: Vec<BookingDto>,
}

/// Range response: day key -> service groups. BTreeMap keeps flattening
/// order deterministic.
pub(crate) type RangeResponse = BTreeMap<String, Vec<ServiceDayGroup>>;

// --- Client ---

/// REST client for the WATurnos booking endpoints.
pub struct BookingApiClient {
    base_url: String,
    client: Client,
    session: Session,
    zone: Tz,
}

impl BookingApiClient {
    pub fn new(base_url: impl Into<String>, client: Client, session: Session, zone: Tz) -> Self {
        BookingApiClient {
            base_url: base_url.into(),
            client,
            session,
            zone,
        }
    }

    /// Builds a client from the application config, honoring a custom
    /// request timeout when one is configured.
    pub fn from_config(config: &AppConfig, session: Session) -> Result<Self, FetchError> {
        let client = match config.api.timeout_secs {
            Some(secs) => create_client(secs, true)?,
            None => HTTP_CLIENT.clone(),
        };
        let zone = display_zone(config.provider.time_zone.as_deref());
        Ok(BookingApiClient::new(
            config.api.base_url.clone(),
            client,
            session,
            zone,
        ))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = join_url(&self.base_url, path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        self.check_session(response.status())?;
        let response = response.error_for_status()?;
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Tears down the session when the backend rejects it: 401 and 403 both
    /// mean the token is no longer usable, so the expiry is flagged for the
    /// outer shell and the fetch fails with [`FetchError::Unauthorized`].
    pub(crate) fn check_session(&self, status: reqwest::StatusCode) -> Result<(), FetchError> {
        if matches!(status.as_u16(), 401 | 403) {
            warn!("Session expired or unauthorized, tearing down session");
            self.session.expire();
            return Err(FetchError::Unauthorized);
        }
        Ok(())
    }

    /// Normalizes a wire booking, stamping `service_id` from the enclosing
    /// range group when the record itself carries none. A booking whose
    /// timestamps do not parse is dropped with a warning rather than
    /// failing the whole fetch.
    pub(crate) fn normalize(
        &self,
        dto: BookingDto,
        group_service_id: Option<i64>,
    ) -> Option<BookingRecord> {
        let start_time = parse_booking_time(&dto.start_time, &self.zone)
            .map_err(|e| warn!(booking_id = dto.id, "Dropping booking: {e}"))
            .ok()?;
        let end_time = parse_booking_time(&dto.end_time, &self.zone)
            .map_err(|e| warn!(booking_id = dto.id, "Dropping booking: {e}"))
            .ok()?;
        Some(BookingRecord {
            id: dto.id,
            service_id: group_service_id.or(dto.service_id).unwrap_or_default(),
            client_id: dto.client_id,
            start_time,
            end_time,
            status: dto.status,
            notes: dto.notes,
        })
    }

    /// Flattens the day -> service groups -> bookings nesting of the range
    /// response into a uniform record list.
    pub(crate) fn flatten_range(&self, response: RangeResponse) -> Vec<BookingRecord> {
        response
            .into_values()
            .flatten()
            .flat_map(|group| {
                let service_id = group.service_id;
                group
                    .bookings
                    .into_iter()
                    .filter_map(move |dto| self.normalize(dto, Some(service_id)))
            })
            .collect()
    }
}

impl BookingService for BookingApiClient {
    type Error = FetchError;

    fn fetch_today(&self, provider_id: i64) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        Box::pin(async move {
            let path = format!("bookings/provider/{provider_id}/today");
            let response: TodayResponse = self.get_json(&path, &[]).await?;
            Ok(response
                .into_bookings()
                .into_iter()
                .filter_map(|dto| self.normalize(dto, None))
                .collect())
        })
    }

    fn fetch_range(
        &self,
        provider_id: i64,
        start_date: &str,
        end_date: &str,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        let start_date = start_date.to_string();
        let end_date = end_date.to_string();
        Box::pin(async move {
            let path = format!("bookings/provider/{provider_id}/range");
            let query = [
                ("startDate", start_date.as_str()),
                ("endDate", end_date.as_str()),
            ];
            let response: RangeResponse = self.get_json(&path, &query).await?;
            Ok(self.flatten_range(response))
        })
    }
}

/// The swallow-errors boundary of the fetch pipeline: any transport or
/// parse failure is logged and degrades to an empty result set, so a
/// failed fetch never takes the calendar down. No automatic retry.
pub async fn load_bookings<S: BookingService + ?Sized>(
    service: &S,
    provider_id: i64,
    range: Option<(&str, &str)>,
) -> Vec<BookingRecord> {
    let result = match range {
        Some((start_date, end_date)) => {
            service.fetch_range(provider_id, start_date, end_date).await
        }
        None => service.fetch_today(provider_id).await,
    };
    match result {
        Ok(records) => records,
        Err(err) => {
            error!("Error cargando turnos: {err}");
            Vec::new()
        }
    }
}
