// --- File: crates/waturnos_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external services used by
//! the calendar subsystem. These traits allow for dependency injection and
//! easier testing by decoupling the view controller from the concrete REST
//! transport.

use crate::models::BookingRecord;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for fetching booking records for a provider.
///
/// This is the seam between the view controller and whatever transport
/// actually talks to the backend. The REST client implements it for
/// production; tests substitute a mock.
pub trait BookingService: Send + Sync {
    /// Error type returned by booking service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch today's bookings for a provider. The backend returns a flat
    /// list (single-day endpoint).
    fn fetch_today(&self, provider_id: i64) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error>;

    /// Fetch bookings over a date range, canonical `YYYY-MM-DD` bounds.
    /// Implementations flatten the backend's day/service grouping into a
    /// uniform record list.
    fn fetch_range(
        &self,
        provider_id: i64,
        start_date: &str,
        end_date: &str,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error>;
}
