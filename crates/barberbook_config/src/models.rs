// --- File: crates/barberbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Zone used for default dates and slot display unless configured otherwise.
pub const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";

/// Backend origin used in development when nothing else is configured.
pub const DEV_BACKEND_ORIGIN: &str = "http://localhost:3000";

// --- Backend API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Explicit base origin for every API call. Wins over `backend_url`.
    pub base_url: Option<String>,
    /// Real backend origin (BACKEND_URL in deployments).
    pub backend_url: Option<String>,
    /// Origin this client is served from; must differ from the backend.
    pub site_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            backend_url: None,
            site_url: None,
            timeout_secs: 30,
        }
    }
}

// --- Session Storage Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage file. When unset the platform data directory is used; when
    /// neither exists the session store runs without storage.
    pub path: Option<String>,
    /// Republish session changes made by other processes.
    pub watch: bool,
}

// --- Display Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub time_zone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// "debug", "production", ... Selects `config/{run_env}.*`.
    pub run_env: String,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            run_env: "debug".to_string(),
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        matches!(self.run_env.as_str(), "production" | "prod" | "release")
    }
}
