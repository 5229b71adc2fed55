//! Environment variable handling for the WATurnos agenda tools.
//!
//! Configuration values can be overridden through env vars with a
//! standardized naming pattern, and secrets are only ever read from env
//! vars (never from config files).

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "WATURNOS";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "WATURNOS_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "api.base_url")
///
/// # Returns
///
/// The environment variable name (e.g., "WATURNOS__API__BASE_URL")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret name to an environment variable name
///
/// # Arguments
///
/// * `name` - The secret name (e.g., "api_token")
///
/// # Returns
///
/// The environment variable name (e.g., "WATURNOS_SECRET_API_TOKEN")
pub fn secret_name_to_env_var(name: &str) -> String {
    format!("{}_{}", SECRET_PREFIX, name).to_uppercase()
}

/// Get a secret from the environment.
///
/// Tries the prefixed naming pattern first and falls back to the bare name
/// for compatibility with older deployments (e.g. `JWT_TOKEN`).
pub fn get_secret_env_var(name: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_name_to_env_var(name)) {
        return Some(value);
    }
    env::var(name.to_uppercase()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_maps_to_prefixed_upper_snake() {
        assert_eq!(
            config_path_to_env_var("api.base_url"),
            "WATURNOS__API__BASE_URL"
        );
    }

    #[test]
    fn secret_name_maps_to_secret_prefix() {
        assert_eq!(secret_name_to_env_var("api_token"), "WATURNOS_SECRET_API_TOKEN");
    }
}
