//! Environment variable handling for the BarberBook client.
//!
//! Configuration values may be overridden through environment variables
//! named after their config path (`api.base_url` becomes
//! `BARBERBOOK__API__BASE_URL`). A handful of deployment variables keep their
//! conventional bare names (`BACKEND_URL`, `SITE_URL`, `RUN_ENV`).

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "BARBERBOOK";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Bare deployment variable holding the real backend origin.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Bare deployment variable holding the origin this client is served from.
pub const SITE_URL_VAR: &str = "SITE_URL";

/// Selects the environment-specific config file.
pub const RUN_ENV_VAR: &str = "RUN_ENV";

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
/// The environment variable name (e.g., "BARBERBOOK__API__BASE_URL")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Get an environment variable for a configuration path
pub fn get_config_env_var(path: &str) -> Option<String> {
    let env_var = config_path_to_env_var(path);
    non_empty(env::var(&env_var).ok())
}

/// Read a bare deployment variable, treating empty values as unset.
pub fn get_deploy_env_var(name: &str) -> Option<String> {
    non_empty(env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
