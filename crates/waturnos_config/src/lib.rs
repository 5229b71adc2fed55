// --- File: crates/waturnos_config/src/lib.rs ---

pub mod env_vars;
pub mod models;

pub use models::{ApiConfig, AppConfig, CalendarConfig, ProviderConfig};

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Load `.env` once per process. Later calls are no-ops, so every entry
/// point (binary, tests) can call this without ordering concerns.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
    });
}

/// Loads the layered application configuration.
///
/// Sources, lowest precedence first:
/// 1. `waturnos.toml` in the working directory (optional),
/// 2. environment variables with the `WATURNOS__` prefix,
///    e.g. `WATURNOS__API__BASE_URL` for `api.base_url`.
///
/// Dependent crates call this so they do not need to know where the
/// configuration physically lives.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config = Config::builder()
        .add_source(File::with_name("waturnos").required(false))
        .add_source(
            Environment::with_prefix(&env_vars::get_config_prefix())
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR),
        )
        .build()?;
    config.try_deserialize()
}

/// The bearer token for the backend, if one is configured in the
/// environment. Secrets never live in config files.
pub fn api_token() -> Option<String> {
    ensure_dotenv_loaded();
    env_vars::get_secret_env_var("api_token").or_else(|| env_vars::get_secret_env_var("jwt_token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_optional_sections() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{ "api": { "base_url": "http://localhost:8085/msvc-waturnos/v1.0" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.calendar.quiet_ms, 150);
        assert_eq!(cfg.calendar.initial_granularity, "month");
        assert!(cfg.provider.default_provider_id.is_none());
        assert!(cfg.api.timeout_secs.is_none());
    }
}
