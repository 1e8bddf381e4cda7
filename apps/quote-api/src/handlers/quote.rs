//! # Quote Handlers
//!
//! Prices a `ProjectSelection` sent as JSON.
//!
//! ## Response Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {                                                                      │
//! │    "subtotal": 610.0,              ◄── major units, for display        │
//! │    "discountAmount": 61.0,                                              │
//! │    "finalTotal": 549.0,                                                 │
//! │    "estimatedDurationDays": 4,                                          │
//! │    "cents": { "subtotal": 61000, ... }  ◄── exact values               │
//! │    "lines": [ ... ]                                                     │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use quoteforge_core::validation::validate_extra_units;
use quoteforge_core::{ProjectSelection, Quote, QuoteEngine, QuoteLine, QuoteLineKind, CURRENCY};

use crate::error::ApiError;
use crate::state::AppState;

/// Exact amounts, in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCents {
    pub subtotal: i64,
    pub discount_amount: i64,
    pub final_total: i64,
    pub deposit_due: i64,
    pub balance_on_completion: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineView {
    pub kind: QuoteLineKind,
    pub item_id: Option<String>,
    pub label: String,
    pub quantity: u64,
    pub amount: f64,
    pub duration_days: f64,
}

impl From<&QuoteLine> for QuoteLineView {
    fn from(line: &QuoteLine) -> Self {
        QuoteLineView {
            kind: line.kind,
            item_id: line.item_id.clone(),
            label: line.label.clone(),
            quantity: line.quantity,
            amount: line.amount.to_major_units(),
            duration_days: line.duration.to_days(),
        }
    }
}

/// A quote as the presentation layer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub catalog: String,
    pub base_package_id: String,
    pub currency: String,
    pub subtotal: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub final_total: f64,
    pub deposit_due: f64,
    pub balance_on_completion: f64,
    /// Duration after rush, before rounding.
    pub duration_days: f64,
    pub estimated_duration_days: u64,
    pub cents: QuoteCents,
    pub lines: Vec<QuoteLineView>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped_add_ons: Vec<String>,
}

impl QuoteResponse {
    pub fn new(catalog: &str, quote: &Quote) -> Self {
        QuoteResponse {
            catalog: catalog.to_string(),
            base_package_id: quote.base_package_id.clone(),
            currency: CURRENCY.to_string(),
            subtotal: quote.subtotal.to_major_units(),
            discount_percent: quote.discount_bps.percentage(),
            discount_amount: quote.discount_amount.to_major_units(),
            final_total: quote.final_total.to_major_units(),
            deposit_due: quote.deposit_due.to_major_units(),
            balance_on_completion: quote.balance_on_completion.to_major_units(),
            duration_days: quote.duration.to_days(),
            estimated_duration_days: quote.estimated_duration_days,
            cents: QuoteCents {
                subtotal: quote.subtotal.cents(),
                discount_amount: quote.discount_amount.cents(),
                final_total: quote.final_total.cents(),
                deposit_due: quote.deposit_due.cents(),
                balance_on_completion: quote.balance_on_completion.cents(),
            },
            lines: quote.lines.iter().map(QuoteLineView::from).collect(),
            skipped_add_ons: quote.skipped_add_ons.clone(),
        }
    }
}

/// Bounds-checks and prices one selection.
pub(crate) fn price(
    state: &AppState,
    engine: &QuoteEngine,
    selection: &ProjectSelection,
) -> Result<QuoteResponse, ApiError> {
    validate_extra_units(selection.extra_units, state.max_extra_units())?;

    let quote = engine.quote(selection)?;
    let catalog = engine.catalog().name();

    if quote.is_partial() {
        tracing::warn!(
            catalog,
            skipped = ?quote.skipped_add_ons,
            "Quote computed without unknown add-ons"
        );
    }

    debug!(
        catalog,
        base = %quote.base_package_id,
        add_ons = quote.add_on_lines().count(),
        subtotal = %quote.subtotal,
        final_total = %quote.final_total,
        days = quote.estimated_duration_days,
        "Quote computed"
    );

    Ok(QuoteResponse::new(catalog, &quote))
}

/// Prices a selection against the default catalog.
pub async fn quote_default(
    State(state): State<AppState>,
    body: Result<Json<ProjectSelection>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(selection) = body?;
    let engine = state.default_engine()?;
    Ok(Json(price(&state, engine, &selection)?))
}

/// Prices a selection against a named catalog.
pub async fn quote_catalog(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<ProjectSelection>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let engine = state.engine(&name)?;
    let Json(selection) = body?;
    Ok(Json(price(&state, engine, &selection)?))
}
