//! # Application State
//!
//! Read-only after startup: one prebuilt [`QuoteEngine`] per catalog profile.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState (Clone, cheap: Arc inside)                                   │
//! │  ├── engines: "calculator" → QuoteEngine { catalog, rules }            │
//! │  │            "order-form" → QuoteEngine { catalog, rules }            │
//! │  ├── default_catalog                                                   │
//! │  └── max_extra_units                                                   │
//! │                                                                         │
//! │  No Mutex: handlers only read. No per-user state: each request        │
//! │  carries its whole selection.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use quoteforge_core::catalog;
use quoteforge_core::{CoreResult, PricingRules, QuoteEngine};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    engines: Arc<BTreeMap<String, QuoteEngine>>,
    default_catalog: String,
    max_extra_units: i64,
    request_timeout: Duration,
}

impl AppState {
    /// Builds both built-in catalogs with the configured lookup mode.
    pub fn from_config(config: &ApiConfig) -> CoreResult<Self> {
        let rules = PricingRules::standard().with_lookup(config.lookup);

        let mut engines = BTreeMap::new();
        for catalog in [catalog::price_calculator()?, catalog::order_form()?] {
            tracing::debug!(catalog = catalog.name(), items = catalog.len(), "Catalog loaded");
            let name = catalog.name().to_string();
            engines.insert(name, QuoteEngine::new(catalog, rules.clone())?);
        }

        Ok(AppState {
            engines: Arc::new(engines),
            default_catalog: config.default_catalog.clone(),
            max_extra_units: config.max_extra_units,
            request_timeout: config.request_timeout(),
        })
    }

    /// Looks up the engine for a catalog profile.
    pub fn engine(&self, name: &str) -> Result<&QuoteEngine, ApiError> {
        self.engines
            .get(name)
            .ok_or_else(|| ApiError::not_found("Catalog", name))
    }

    pub fn default_engine(&self) -> Result<&QuoteEngine, ApiError> {
        self.engine(&self.default_catalog)
    }

    pub fn default_catalog(&self) -> &str {
        &self.default_catalog
    }

    /// Profile names in sorted order.
    pub fn catalog_names(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    pub fn max_extra_units(&self) -> i64 {
        self.max_extra_units
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteforge_core::LookupMode;

    #[test]
    fn test_builds_every_builtin() {
        let state = AppState::from_config(&ApiConfig::default()).unwrap();
        let names: Vec<&str> = state.catalog_names().collect();
        assert_eq!(names, vec!["calculator", "order-form"]);
        assert_eq!(state.default_engine().unwrap().catalog().name(), "order-form");
    }

    #[test]
    fn test_lookup_mode_reaches_engines() {
        let config = ApiConfig {
            lookup: LookupMode::Lenient,
            ..ApiConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.engine("order-form").unwrap().rules().lookup, LookupMode::Lenient);
    }

    #[test]
    fn test_unknown_profile() {
        let state = AppState::from_config(&ApiConfig::default()).unwrap();
        assert!(state.engine("wholesale").is_err());
    }
}
