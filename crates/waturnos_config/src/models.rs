// --- File: crates/waturnos_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Backend API Config ---
// Holds non-secret API config. The bearer token is loaded directly from an
// env var (WATURNOS_SECRET_API_TOKEN) so it never lands in a config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the WATurnos REST backend,
    /// e.g. `http://localhost:8085/msvc-waturnos/v1.0`
    pub base_url: String,
    /// Request timeout in seconds. Falls back to the shared client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

// --- Provider Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProviderConfig {
    /// Provider whose agenda is loaded when no explicit selection exists.
    #[serde(default)]
    pub default_provider_id: Option<i64>,
    /// IANA time zone used to render wall-clock times for this provider.
    #[serde(default)]
    pub time_zone: Option<String>,
}

// --- Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendarConfig {
    /// Quiet interval for the range-change debounce, in milliseconds.
    #[serde(default = "default_quiet_ms")]
    pub quiet_ms: u64,
    /// Initial view granularity: "month", "week" or "day".
    #[serde(default = "default_granularity")]
    pub initial_granularity: String,
}

fn default_quiet_ms() -> u64 {
    150
}

fn default_granularity() -> String {
    "month".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            quiet_ms: default_quiet_ms(),
            initial_granularity: default_granularity(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // API config is mandatory: without a backend there is nothing to fetch
    pub api: ApiConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,
}
