//! # Order Handler
//!
//! Accepts an order submission, prices it, and returns a receipt.
//!
//! ## Flow
//! ```text
//! POST /orders
//!    │
//!    ├── 1. Parse JSON            (400 VALIDATION_ERROR on bad body)
//!    ├── 2. Resolve catalog       (404 NOT_FOUND on unknown profile)
//!    ├── 3. Validate customer     (400 VALIDATION_ERROR)
//!    ├── 4. Compute quote         (422 UNKNOWN_CATALOG_ITEM)
//!    └── 5. Log + 201 receipt
//! ```
//!
//! The receipt is not persisted and no notification is sent; the structured
//! log line is the record of the order.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use quoteforge_core::{CustomerInfo, OrderRequest};

use crate::error::ApiError;
use crate::handlers::quote::{price, QuoteResponse};
use crate::state::AppState;

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(flatten)]
    pub order: OrderRequest,
    /// Catalog profile; the default catalog when absent.
    #[serde(default)]
    pub catalog: Option<String>,
}

/// Acknowledgement of an accepted order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub customer: CustomerInfo,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub customizations: Option<String>,
    pub quote: QuoteResponse,
}

/// Validates, prices and acknowledges an order.
pub async fn submit_order(
    State(state): State<AppState>,
    body: Result<Json<OrderSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderReceipt>), ApiError> {
    let Json(submission) = body?;

    let engine = match &submission.catalog {
        Some(name) => state.engine(name)?,
        None => state.default_engine()?,
    };

    let order = submission.order;
    order.validate(state.max_extra_units())?;

    let quote = price(&state, engine, &order.selection)?;

    let receipt = OrderReceipt {
        order_id: Uuid::new_v4(),
        received_at: Utc::now(),
        customer: order.customer,
        customizations: order.customizations.filter(|text| !text.trim().is_empty()),
        quote,
    };

    info!(
        order_id = %receipt.order_id,
        catalog = %receipt.quote.catalog,
        platform = %receipt.customer.platform,
        email = %receipt.customer.email,
        final_total_cents = receipt.quote.cents.final_total,
        days = receipt.quote.estimated_duration_days,
        "Order received"
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}
