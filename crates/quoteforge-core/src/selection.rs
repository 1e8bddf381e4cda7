//! # Project Selection
//!
//! The customer's current configuration, as an explicit value.
//!
//! ## Ownership of State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation layer (owns the mutable selection)                       │
//! │                                                                         │
//! │  Toggle feature ──► selection.toggle_add_on("dark-mode")               │
//! │  Stepper  [-]   ──► selection.decrement_extra_units()  (stops at 0)    │
//! │  Radio button   ──► selection.rush_tier = RushTier::Half               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  compute_quote(&selection, &catalog)  ◄── re-run on every change       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::types::{AdvanceTier, RushTier};

/// A full set of choices to price.
///
/// ## Invariants
/// - `selected_add_ons` is a set: selecting an id twice is a no-op
/// - `rush_tier` and `advance_tier` hold exactly one value each
/// - `extra_units` may arrive negative from a caller; the engine clamps it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSelection {
    /// The foundational package (e.g. `main` or `business`).
    pub base_package_id: String,

    /// Count of repeatable units such as additional pages.
    #[serde(default)]
    pub extra_units: i64,

    /// Add-on catalog ids.
    #[serde(default)]
    pub selected_add_ons: BTreeSet<String>,

    #[serde(default)]
    pub rush_tier: RushTier,

    /// Flat surcharge for transferring code ownership.
    #[serde(default)]
    pub ownership_rights: bool,

    #[serde(default)]
    pub advance_tier: AdvanceTier,
}

impl ProjectSelection {
    /// A selection of just the base package with every option at its default.
    pub fn new(base_package_id: impl Into<String>) -> Self {
        ProjectSelection {
            base_package_id: base_package_id.into(),
            extra_units: 0,
            selected_add_ons: BTreeSet::new(),
            rush_tier: RushTier::None,
            ownership_rights: false,
            advance_tier: AdvanceTier::None,
        }
    }

    /// Extra units as the engine sees them: never below zero.
    #[inline]
    pub fn effective_extra_units(&self) -> u64 {
        self.extra_units.max(0) as u64
    }

    /// Sets the extra unit count, clamping negatives to zero.
    pub fn set_extra_units(&mut self, units: i64) -> &mut Self {
        self.extra_units = units.max(0);
        self
    }

    /// Stepper `+`.
    pub fn increment_extra_units(&mut self) -> &mut Self {
        self.extra_units = self.extra_units.max(0).saturating_add(1);
        self
    }

    /// Stepper `-`. Stops at zero.
    pub fn decrement_extra_units(&mut self) -> &mut Self {
        self.extra_units = self.extra_units.saturating_sub(1).max(0);
        self
    }

    /// Adds an add-on. Returns `false` if it was already selected.
    pub fn add_add_on(&mut self, id: impl Into<String>) -> bool {
        self.selected_add_ons.insert(id.into())
    }

    /// Removes an add-on. Returns `false` if it wasn't selected.
    pub fn remove_add_on(&mut self, id: &str) -> bool {
        self.selected_add_ons.remove(id)
    }

    /// Flips an add-on on or off. Returns whether it is now selected.
    pub fn toggle_add_on(&mut self, id: &str) -> bool {
        if self.selected_add_ons.remove(id) {
            false
        } else {
            self.selected_add_ons.insert(id.to_string());
            true
        }
    }

    pub fn has_add_on(&self, id: &str) -> bool {
        self.selected_add_ons.contains(id)
    }

    pub fn with_extra_units(mut self, units: i64) -> Self {
        self.set_extra_units(units);
        self
    }

    pub fn with_add_on(mut self, id: impl Into<String>) -> Self {
        self.add_add_on(id);
        self
    }

    pub fn with_rush_tier(mut self, tier: RushTier) -> Self {
        self.rush_tier = tier;
        self
    }

    pub fn with_advance_tier(mut self, tier: AdvanceTier) -> Self {
        self.advance_tier = tier;
        self
    }

    pub fn with_ownership_rights(mut self, ownership_rights: bool) -> Self {
        self.ownership_rights = ownership_rights;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_defaults() {
        let selection = ProjectSelection::new("basic");
        assert_eq!(selection.base_package_id, "basic");
        assert_eq!(selection.extra_units, 0);
        assert!(selection.selected_add_ons.is_empty());
        assert_eq!(selection.rush_tier, RushTier::None);
        assert!(!selection.ownership_rights);
        assert_eq!(selection.advance_tier, AdvanceTier::None);
    }

    #[test]
    fn test_stepper_never_goes_negative() {
        let mut selection = ProjectSelection::new("main");
        selection.decrement_extra_units();
        assert_eq!(selection.extra_units, 0);

        selection.increment_extra_units().increment_extra_units();
        assert_eq!(selection.extra_units, 2);

        selection.decrement_extra_units();
        assert_eq!(selection.extra_units, 1);
    }

    #[test]
    fn test_set_extra_units_clamps() {
        let mut selection = ProjectSelection::new("main");
        selection.set_extra_units(-4);
        assert_eq!(selection.extra_units, 0);
    }

    #[test]
    fn test_effective_extra_units_clamps_raw_value() {
        let mut selection = ProjectSelection::new("main");
        selection.extra_units = -7;
        assert_eq!(selection.effective_extra_units(), 0);
    }

    #[test]
    fn test_add_ons_are_a_set() {
        let mut selection = ProjectSelection::new("main");
        assert!(selection.add_add_on("dark-mode"));
        assert!(!selection.add_add_on("dark-mode"));
        assert_eq!(selection.selected_add_ons.len(), 1);
    }

    #[test]
    fn test_toggle_add_on() {
        let mut selection = ProjectSelection::new("main");
        assert!(selection.toggle_add_on("seo-optimization"));
        assert!(selection.has_add_on("seo-optimization"));
        assert!(!selection.toggle_add_on("seo-optimization"));
        assert!(!selection.has_add_on("seo-optimization"));
        assert!(!selection.remove_add_on("seo-optimization"));
    }

    #[test]
    fn test_deserialize_request_example() {
        let json = r#"{"basePackageId":"main","extraUnits":2,
            "selectedAddOns":["dark-mode","seo-optimization","dark-mode"],
            "rushTier":"half","ownershipRights":true,"advanceTier":"fifty"}"#;
        let selection: ProjectSelection = serde_json::from_str(json).unwrap();

        assert_eq!(selection.base_package_id, "main");
        assert_eq!(selection.extra_units, 2);
        assert_eq!(selection.selected_add_ons.len(), 2);
        assert_eq!(selection.rush_tier, RushTier::Half);
        assert!(selection.ownership_rights);
        assert_eq!(selection.advance_tier, AdvanceTier::Half);
    }

    #[test]
    fn test_deserialize_minimal() {
        let selection: ProjectSelection =
            serde_json::from_str(r#"{"basePackageId":"basic"}"#).unwrap();
        assert_eq!(selection, ProjectSelection::new("basic"));
    }
}
