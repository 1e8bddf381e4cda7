//! # Order Intake
//!
//! The data an order submission carries, and its validation.
//!
//! The wizard that collects it (customer details, package, services,
//! review) is a presentation concern. Whatever it submits is checked here
//! before a quote is computed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::selection::ProjectSelection;
use crate::validation::{
    validate_customer_name, validate_customizations, validate_email, validate_extra_units,
    validate_phone, validate_platform, validate_platform_url, ValidationResult,
};

/// Who is ordering, and where they found us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// One of [`crate::validation::ORDER_PLATFORMS`].
    pub platform: String,
    /// Profile or listing URL on that platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_url: Option<String>,
}

impl CustomerInfo {
    /// Checks every customer field.
    ///
    /// Name, e-mail and platform are required. Phone and platform URL are
    /// optional but must be well-formed when present.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_customer_name(&self.name)?;
        validate_email(&self.email)?;
        validate_platform(&self.platform)?;

        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(url) = &self.platform_url {
            validate_platform_url(url)?;
        }

        Ok(())
    }
}

/// A complete order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer: CustomerInfo,
    pub selection: ProjectSelection,
    /// Free-text notes (colours, references, anything not in the catalog).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<String>,
}

impl OrderRequest {
    /// Validates the submission. Stops at the first failing field.
    ///
    /// Catalog ids are not checked here; the engine reports those as
    /// `UnknownCatalogItem` when the order is priced.
    pub fn validate(&self, max_extra_units: i64) -> ValidationResult<()> {
        self.customer.validate()?;
        validate_extra_units(self.selection.extra_units, max_extra_units)?;

        if let Some(text) = &self.customizations {
            validate_customizations(text)?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
