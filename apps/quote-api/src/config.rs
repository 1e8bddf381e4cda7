//! Quote API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use quoteforge_core::catalog::BUILTIN_CATALOGS;
use quoteforge_core::rules::MAX_EXTRA_UNITS;
use quoteforge_core::{LookupMode, DEFAULT_CATALOG};

/// Quote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Catalog profile used by `POST /quote`
    pub default_catalog: String,

    /// What to do with unknown add-on ids
    pub lookup: LookupMode,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Largest extra unit count a request may carry
    pub max_extra_units: i64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let config = ApiConfig {
            host: var("QUOTE_API_HOST", "0.0.0.0"),

            port: var("QUOTE_API_PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_API_PORT".to_string()))?,

            default_catalog: var("QUOTE_DEFAULT_CATALOG", DEFAULT_CATALOG),

            lookup: var("QUOTE_LOOKUP_MODE", "strict")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_LOOKUP_MODE".to_string()))?,

            request_timeout_secs: var("QUOTE_REQUEST_TIMEOUT_SECS", "10")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_REQUEST_TIMEOUT_SECS".to_string()))?,

            max_extra_units: var("QUOTE_MAX_EXTRA_UNITS", &MAX_EXTRA_UNITS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_MAX_EXTRA_UNITS".to_string()))?,
        };

        if !BUILTIN_CATALOGS.contains(&config.default_catalog.as_str()) {
            return Err(ConfigError::InvalidValue("QUOTE_DEFAULT_CATALOG".to_string()));
        }

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("QUOTE_REQUEST_TIMEOUT_SECS".to_string()));
        }

        if config.max_extra_units < 0 {
            return Err(ConfigError::InvalidValue("QUOTE_MAX_EXTRA_UNITS".to_string()));
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_catalog: DEFAULT_CATALOG.to_string(),
            lookup: LookupMode::Strict,
            request_timeout_secs: 10,
            max_extra_units: MAX_EXTRA_UNITS,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.default_catalog, "order-form");
        assert_eq!(config.lookup, LookupMode::Strict);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_extra_units, 999);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("QUOTE_API_PORT", "9000"),
            ("QUOTE_DEFAULT_CATALOG", "calculator"),
            ("QUOTE_LOOKUP_MODE", "lenient"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_catalog, "calculator");
        assert_eq!(config.lookup, LookupMode::Lenient);
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("QUOTE_API_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "QUOTE_API_PORT"));

        assert!(load(&[("QUOTE_LOOKUP_MODE", "loose")]).is_err());
        assert!(load(&[("QUOTE_DEFAULT_CATALOG", "wholesale")]).is_err());
        assert!(load(&[("QUOTE_REQUEST_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("QUOTE_MAX_EXTRA_UNITS", "-1")]).is_err());
    }
}
