//! # Validation Module
//!
//! Input validation utilities for Quoteforge.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (order wizard)                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback, "Next" button gating                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: quote-api handler                                            │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Quotation engine                                             │
//! │  └── Catalog resolution (UnknownCatalogItem)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quoteforge_core::validation::{validate_email, validate_extra_units};
//!
//! assert!(validate_email("client@example.com").is_ok());
//! assert!(validate_extra_units(5, 999).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Platforms an order can arrive through.
pub const ORDER_PLATFORMS: [&str; 5] = ["Fiverr", "Upwork", "Freelancer", "Direct Contact", "Other"];

// =============================================================================
// String Validators
// =============================================================================

fn required<'a>(field: &str, value: &'a str, max: usize) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value)
}

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Lowercase letters, digits and hyphens only (`seo-optimization`)
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = required("item id", id, 64)?;

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "item id".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog item display name (1-120 characters).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    required("item name", name, 120).map(|_| ())
}

/// Validates a customer name (1-100 characters).
///
/// ## Example
/// ```rust
/// use quoteforge_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Jane Doe").is_ok());
/// assert!(validate_customer_name("   ").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    required("customer name", name, 100).map(|_| ())
}

/// Validates an e-mail address.
///
/// ## Rules
/// - Must not be empty, at most 254 characters
/// - Exactly one `@`, non-empty local part
/// - Domain contains a dot, with no empty labels
/// - No whitespace
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = required("email", email, 254)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid("domain must look like example.com"));
    }

    Ok(())
}

/// Validates an optional phone number.
///
/// ## Rules
/// - Empty is allowed (phone is optional on the order form)
/// - At most 30 characters
/// - Digits, spaces, and `+ - ( )` only, with at least one digit
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }

    if phone.len() > 30 {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: 30,
        });
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    Ok(())
}

/// Validates the platform an order came through.
///
/// ## Rules
/// - Required
/// - One of [`ORDER_PLATFORMS`]
pub fn validate_platform(platform: &str) -> ValidationResult<()> {
    let platform = required("platform", platform, 50)?;

    if !ORDER_PLATFORMS.contains(&platform) {
        return Err(ValidationError::NotAllowed {
            field: "platform".to_string(),
            allowed: ORDER_PLATFORMS.iter().map(|p| p.to_string()).collect(),
        });
    }

    Ok(())
}

/// Validates an optional profile/listing URL.
///
/// ## Rules
/// - Empty is allowed
/// - At most 500 characters
/// - Must start with `http://` or `https://`
pub fn validate_platform_url(url: &str) -> ValidationResult<()> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(());
    }

    if url.len() > 500 {
        return Err(ValidationError::TooLong {
            field: "platform url".to_string(),
            max: 500,
        });
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.chars().any(char::is_whitespace) => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "platform url".to_string(),
            reason: "must be an http(s) URL".to_string(),
        }),
    }
}

/// Validates free-text customization notes (at most 5000 characters).
pub fn validate_customizations(text: &str) -> ValidationResult<()> {
    if text.chars().count() > 5000 {
        return Err(ValidationError::TooLong {
            field: "customizations".to_string(),
            max: 5000,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (bundled items)
///
/// ## Example
/// ```rust
/// use quoteforge_core::money::Money;
/// use quoteforge_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_major(150)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an extra unit count at the service boundary.
///
/// Negative counts are NOT rejected here: the engine clamps them to zero,
/// the same as the stepper control that refuses to go below zero. Only the
/// upper bound is enforced, to keep runaway requests out.
pub fn validate_extra_units(units: i64, max: i64) -> ValidationResult<()> {
    if units > max {
        return Err(ValidationError::OutOfRange {
            field: "extra units".to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

/// Validates a rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
