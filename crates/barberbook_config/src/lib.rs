// --- File: crates/barberbook_config/src/lib.rs ---
pub mod env_vars;
pub mod models;
pub mod origin;

use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::Path;

pub use config::ConfigError;
pub use models::*;
pub use origin::{normalize_origin, resolve_api_origin, OriginError};

use env_vars::{
    get_config_prefix, get_deploy_env_var, BACKEND_URL_VAR, CONFIG_SEPARATOR, RUN_ENV_VAR,
    SITE_URL_VAR,
};

/// Loads the configuration from `$CONFIG_DIR` (default `./config`).
///
/// Sources, lowest priority first: built-in defaults, `default.*`,
/// `{RUN_ENV}.*`, `BARBERBOOK__*` environment variables, and finally the bare
/// deployment variables (`BACKEND_URL`, `SITE_URL`) for values still unset.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    load_config_from(Path::new(&config_dir))
}

/// Same as [`load_config`] with an explicit config directory.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = get_deploy_env_var(RUN_ENV_VAR).unwrap_or_else(|| "debug".to_string());
    let prefix = get_config_prefix();

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    let builder = Config::builder()
        .set_default("run_env", run_env.clone())?
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator(CONFIG_SEPARATOR));

    let mut config: AppConfig = builder.build()?.try_deserialize()?;
    apply_deploy_overrides(&mut config);
    tracing::debug!(run_env = %config.run_env, "Configuration loaded");
    Ok(config)
}

/// Fills unset origins from the bare deployment variables.
pub fn apply_deploy_overrides(config: &mut AppConfig) {
    if config.api.backend_url.is_none() {
        config.api.backend_url = get_deploy_env_var(BACKEND_URL_VAR);
    }
    if config.api.site_url.is_none() {
        config.api.site_url = get_deploy_env_var(SITE_URL_VAR);
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file once per process.
///
/// `BARBERBOOK_DOTENV` overrides the default `.env` path. Returns the path
/// that was (or would have been) loaded; a missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("BARBERBOOK_DOTENV").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
