//! # Error Types
//!
//! Domain-specific error types for quoteforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quoteforge-core errors (this file)                                    │
//! │  ├── CoreError        - Pricing and configuration errors               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quote-api errors (app)                                                │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Kinds of Failure
//! `UnknownCatalogItem` means a stale or corrupt catalog reference: a
//! programming/config error. `ValidationError` means the customer typed
//! something wrong. Callers report them differently.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A selection references an id the catalog does not contain.
    ///
    /// ## When This Occurs
    /// - The base package id is mistyped or was removed
    /// - An add-on id is stale (catalog changed under a saved selection)
    ///
    /// The quote is rejected outright. Skipping the item would under-price
    /// the project without anyone noticing.
    #[error("Unknown catalog item: {0}")]
    UnknownCatalogItem(String),

    /// A pricing rule set is not usable (rate above 100%, zero divisor).
    #[error("Invalid pricing rules: {reason}")]
    InvalidRules { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Checks whether this is a catalog/config fault rather than bad user input.
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownCatalogItem(_) | CoreError::InvalidRules { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed e-mail, bad URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two catalog items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
