//! # Catalog Handlers
//!
//! Read-only catalog listings for building the selection UI.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use quoteforge_core::catalog::base_package_ids;
use quoteforge_core::{CatalogItem, PricingRules};

use crate::error::ApiError;
use crate::state::AppState;

/// One entry in `GET /catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub name: String,
    pub item_count: usize,
    pub base_packages: Vec<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogList {
    pub default_catalog: String,
    pub catalogs: Vec<CatalogSummary>,
}

/// Items under one category heading, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

/// `GET /catalogs/{name}`: the items plus the constants that price them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub name: String,
    pub base_packages: Vec<String>,
    pub categories: Vec<CategoryView>,
    pub rules: PricingRules,
}

/// Lists the catalog profiles.
pub async fn list_catalogs(State(state): State<AppState>) -> Result<Json<CatalogList>, ApiError> {
    let mut catalogs = Vec::new();
    for name in state.catalog_names() {
        let catalog = state.engine(name)?.catalog();
        catalogs.push(CatalogSummary {
            name: name.to_string(),
            item_count: catalog.len(),
            base_packages: base_package_ids(catalog).into_iter().map(str::to_string).collect(),
            is_default: name == state.default_catalog(),
        });
    }

    debug!(count = catalogs.len(), "Listing catalogs");

    Ok(Json(CatalogList {
        default_catalog: state.default_catalog().to_string(),
        catalogs,
    }))
}

/// Returns one catalog grouped by category.
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CatalogView>, ApiError> {
    let engine = state.engine(&name)?;
    let catalog = engine.catalog();

    let categories = catalog
        .categories()
        .into_iter()
        .map(|category| CategoryView {
            name: category.to_string(),
            items: catalog.items_in(category).cloned().collect(),
        })
        .collect();

    debug!(catalog = %name, items = catalog.len(), "Serving catalog");

    Ok(Json(CatalogView {
        name: catalog.name().to_string(),
        base_packages: base_package_ids(catalog).into_iter().map(str::to_string).collect(),
        categories,
        rules: engine.rules().clone(),
    }))
}
