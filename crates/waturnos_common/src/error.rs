// --- File: crates/waturnos_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all WATurnos errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for WaturnosError.
#[derive(Error, Debug)]
pub enum WaturnosError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Common error conversions
impl From<reqwest::Error> for WaturnosError {
    fn from(err: reqwest::Error) -> Self {
        WaturnosError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for WaturnosError {
    fn from(err: serde_json::Error) -> Self {
        WaturnosError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for WaturnosError {
    fn from(err: std::io::Error) -> Self {
        WaturnosError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn internal_error<T: fmt::Display>(message: T) -> WaturnosError {
    WaturnosError::InternalError(message.to_string())
}
