//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Quoteforge                             │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /quote                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Json<T>, ApiError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON / field? ─── ValidationError ───────────┐  400        │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Unknown id? ───── CoreError::UnknownCatalogItem ── ApiError ──►│  │
//! │  │         │                                             422        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! {
//!   "code": "UNKNOWN_CATALOG_ITEM",
//!   "message": "Unknown catalog item: blockchain"
//! }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use quoteforge_core::{CoreError, ValidationError};

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Selection names an id the catalog lacks (422)
    UnknownCatalogItem,

    /// Input validation failed (400)
    ValidationError,

    /// Route resource not found, e.g. a catalog profile (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::UnknownCatalogItem => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
///
/// Catalog and rule faults are logged at `error` (a stale id or a broken
/// deployment); bad customer input stays at `debug`.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_configuration_fault() {
            tracing::error!("Pricing failed on configuration: {}", err);
        }

        match err {
            CoreError::UnknownCatalogItem(id) => ApiError::new(
                ErrorCode::UnknownCatalogItem,
                format!("Unknown catalog item: {}", id),
            ),
            CoreError::InvalidRules { .. } => ApiError::internal("Pricing is misconfigured"),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::debug!(field = err.field(), "Validation failed: {}", err);
        ApiError::validation(err.to_string())
    }
}

/// Malformed or mistyped JSON bodies.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_item_maps_to_422() {
        let err: ApiError = CoreError::UnknownCatalogItem("blockchain".to_string()).into();
        assert_eq!(err.code, ErrorCode::UnknownCatalogItem);
        assert_eq!(err.code.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.contains("blockchain"));
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "email".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_rules_are_internal() {
        let err: ApiError = CoreError::InvalidRules {
            reason: "zero divisor".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("divisor"));
    }

    #[test]
    fn test_code_serialization() {
        let json = serde_json::to_string(&ApiError::not_found("Catalog", "wholesale")).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NOT_FOUND","message":"Catalog not found: wholesale"}"#
        );
    }
}
