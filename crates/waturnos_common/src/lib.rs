// --- File: crates/waturnos_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions
pub mod session; // Observable session context

// Re-export error types and utilities for easier access
pub use error::{internal_error, WaturnosError};

// Re-export HTTP utilities for easier access
pub use http::{create_client, join_url, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export shared models and service seams
pub use models::{BookingRecord, BookingStatus};
pub use services::{BookingService, BoxFuture, BoxedError};
pub use session::{Session, SessionState};
