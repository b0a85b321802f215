//! Backend origin resolution.
//!
//! Every API path is `/api/...`; this module decides which origin those paths
//! are resolved against. An explicit `api.base_url` wins. Otherwise the
//! deployment's backend origin is used, with the same guard rails a reverse
//! proxy rule would need: production must name a backend, and the backend may
//! not be the client's own origin.

use thiserror::Error;
use tracing::warn;
use url::{Origin, Url};

use crate::models::{AppConfig, DEV_BACKEND_ORIGIN};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OriginError {
    #[error("BACKEND_URL is required in production (set it to the real backend origin)")]
    MissingBackend,
    #[error("BACKEND_URL cannot match the site origin; it must point to the real backend")]
    SameAsSite,
    #[error("Invalid backend origin: {0}")]
    Invalid(String),
}

/// Reduces a URL-ish value to its origin (`scheme://host[:port]`).
///
/// Values without a scheme are treated as `https://`. Returns `None` for
/// empty or unparsable input.
pub fn normalize_origin(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let candidate = if value.contains("://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    };
    let url = Url::parse(&candidate).ok()?;
    match url.origin() {
        origin @ Origin::Tuple(..) => Some(origin.ascii_serialization()),
        Origin::Opaque(_) => None,
    }
}

/// Strips trailing slashes so `format!("{base}{path}")` never doubles them.
pub fn trim_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Picks the origin all API calls are sent to.
pub fn resolve_api_origin(config: &AppConfig) -> Result<String, OriginError> {
    let api = &config.api;
    let production = config.is_production();

    if let Some(base) = api.base_url.as_deref().map(trim_base) {
        if !base.is_empty() {
            return Ok(base);
        }
    }

    let raw_backend = match api.backend_url.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ if production => return Err(OriginError::MissingBackend),
        _ => return Ok(DEV_BACKEND_ORIGIN.to_string()),
    };

    let backend_origin =
        normalize_origin(raw_backend).ok_or_else(|| OriginError::Invalid(raw_backend.to_string()))?;
    let site_origin = api.site_url.as_deref().and_then(normalize_origin);

    if site_origin.as_deref() == Some(backend_origin.as_str()) {
        if production {
            return Err(OriginError::SameAsSite);
        }
        warn!(
            "Backend origin {} matches the site origin; using {}",
            backend_origin, DEV_BACKEND_ORIGIN
        );
        return Ok(DEV_BACKEND_ORIGIN.to_string());
    }

    Ok(backend_origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(run_env: &str, base: Option<&str>, backend: Option<&str>, site: Option<&str>) -> AppConfig {
        let mut config = AppConfig {
            run_env: run_env.to_string(),
            ..AppConfig::default()
        };
        config.api.base_url = base.map(str::to_string);
        config.api.backend_url = backend.map(str::to_string);
        config.api.site_url = site.map(str::to_string);
        config
    }

    #[test]
    fn test_normalize_origin() {
        assert_eq!(
            normalize_origin("api.example.com/some/path"),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(
            normalize_origin("http://localhost:3000/api/"),
            Some("http://localhost:3000".to_string())
        );
        assert_eq!(normalize_origin("   "), None);
        assert_eq!(normalize_origin("http://"), None);
    }

    #[test]
    fn test_base_url_wins_and_is_trimmed() {
        let cfg = config("production", Some("https://api.example.com///"), None, None);
        assert_eq!(resolve_api_origin(&cfg).unwrap(), "https://api.example.com");
    }

    #[test]
    fn test_dev_default_without_backend() {
        let cfg = config("debug", None, None, None);
        assert_eq!(resolve_api_origin(&cfg).unwrap(), DEV_BACKEND_ORIGIN);
    }

    #[test]
    fn test_production_requires_backend() {
        let cfg = config("production", None, Some("  "), None);
        assert_eq!(resolve_api_origin(&cfg), Err(OriginError::MissingBackend));
    }

    #[test]
    fn test_backend_matching_site_origin() {
        let prod = config(
            "production",
            None,
            Some("https://barber.example.com"),
            Some("barber.example.com"),
        );
        assert_eq!(resolve_api_origin(&prod), Err(OriginError::SameAsSite));

        let dev = config(
            "debug",
            None,
            Some("https://barber.example.com"),
            Some("barber.example.com"),
        );
        assert_eq!(resolve_api_origin(&dev).unwrap(), DEV_BACKEND_ORIGIN);
    }

    #[test]
    fn test_backend_used_when_distinct() {
        let cfg = config(
            "production",
            None,
            Some("https://api.example.com/"),
            Some("https://admin.example.com"),
        );
        assert_eq!(resolve_api_origin(&cfg).unwrap(), "https://api.example.com");
    }

    #[test]
    fn test_backend_without_scheme_gets_https() {
        let cfg = config("production", None, Some("api.example.com"), None);
        assert_eq!(resolve_api_origin(&cfg).unwrap(), "https://api.example.com");
    }

    #[test]
    fn test_backend_path_is_dropped() {
        let cfg = config("debug", None, Some("https://api.example.com/v1/"), None);
        assert_eq!(resolve_api_origin(&cfg).unwrap(), "https://api.example.com");

        let with_port = config("debug", None, Some("http://10.0.0.5:8080/api"), None);
        assert_eq!(resolve_api_origin(&with_port).unwrap(), "http://10.0.0.5:8080");
    }
}
