//! # Quotation Engine
//!
//! Turns a [`ProjectSelection`] into a [`Quote`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. base package          subtotal = price      duration = days        │
//! │  2. extra units × n       subtotal += 80 × n    duration += 1 × n      │
//! │  3. add-ons (set)         subtotal += price     duration += days       │
//! │  4. rush tier             subtotal += fee       duration = ceil(D/k)   │
//! │  5. ownership rights      subtotal += 60                               │
//! │  6. advance tier          discount = subtotal × rate                   │
//! │  7. final_total = subtotal - discount                                  │
//! │  8. estimated days = ceil(duration)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rush shrink runs once, on the summed duration. Never per item.
//!
//! ## Purity
//! No I/O, no clock, no randomness, no shared state. The same selection and
//! catalog always produce the same quote.

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::{LookupMode, PricingRules};
use crate::selection::ProjectSelection;
use crate::types::{CatalogItem, Quote, QuoteLine, QuoteLineKind, RushTier, WorkDays};

const EXTRA_UNITS_LABEL: &str = "Additional Pages";
const OWNERSHIP_LABEL: &str = "Ownership Rights";

/// Prices a selection with the standard rule set.
///
/// ## Errors
/// `CoreError::UnknownCatalogItem` if the base package or any add-on id is
/// not in the catalog. No partial quote is returned.
///
/// ## Example
/// ```rust
/// use quoteforge_core::catalog;
/// use quoteforge_core::engine::compute_quote;
/// use quoteforge_core::money::Money;
/// use quoteforge_core::selection::ProjectSelection;
///
/// let catalog = catalog::price_calculator().unwrap();
/// let selection = ProjectSelection::new("basic").with_extra_units(2);
///
/// let quote = compute_quote(&selection, &catalog).unwrap();
/// assert_eq!(quote.subtotal, Money::from_major(310));
/// assert_eq!(quote.estimated_duration_days, 5);
/// ```
pub fn compute_quote(selection: &ProjectSelection, catalog: &Catalog) -> CoreResult<Quote> {
    compute_quote_with(selection, catalog, &PricingRules::standard())
}

/// Prices a selection with an explicit rule set.
///
/// ## Errors
/// `CoreError::InvalidRules` if `rules` fails [`PricingRules::validate`]
/// (discount above 100%, zero rush divisor, negative fee). Nothing is priced.
pub fn compute_quote_with(
    selection: &ProjectSelection,
    catalog: &Catalog,
    rules: &PricingRules,
) -> CoreResult<Quote> {
    rules.validate()?;

    let mut lines = Vec::with_capacity(selection.selected_add_ons.len() + 4);
    let mut skipped_add_ons = Vec::new();

    // Base package
    let base = catalog.resolve(&selection.base_package_id)?;
    lines.push(item_line(QuoteLineKind::Package, base));

    // Extra units
    let extra_units = selection.effective_extra_units();
    if extra_units > 0 {
        lines.push(QuoteLine {
            kind: QuoteLineKind::ExtraUnits,
            item_id: None,
            label: EXTRA_UNITS_LABEL.to_string(),
            quantity: extra_units,
            amount: rules
                .extra_unit_price
                .multiply_quantity(i64::try_from(extra_units).unwrap_or(i64::MAX)),
            duration: rules.extra_unit_duration.multiply_units(extra_units),
        });
    }

    // Add-ons, each counted once
    for id in &selection.selected_add_ons {
        match (catalog.get(id), rules.lookup) {
            (Some(item), _) => lines.push(item_line(QuoteLineKind::AddOn, item)),
            (None, LookupMode::Lenient) => skipped_add_ons.push(id.clone()),
            (None, LookupMode::Strict) => return Err(CoreError::UnknownCatalogItem(id.clone())),
        }
    }

    // Rush delivery: flat fee, then one shrink of the summed duration
    let rush = rules.rush(selection.rush_tier);
    let summed: WorkDays = lines.iter().map(|line| line.duration).sum();
    let duration = summed.shrink_by(rush.divisor);
    if selection.rush_tier != RushTier::None {
        lines.push(QuoteLine {
            kind: QuoteLineKind::RushDelivery,
            item_id: None,
            label: selection.rush_tier.label().to_string(),
            quantity: 1,
            amount: rush.fee,
            duration: WorkDays::zero(),
        });
    }

    // Ownership rights
    if selection.ownership_rights {
        lines.push(QuoteLine {
            kind: QuoteLineKind::OwnershipRights,
            item_id: None,
            label: OWNERSHIP_LABEL.to_string(),
            quantity: 1,
            amount: rules.ownership_fee,
            duration: WorkDays::zero(),
        });
    }

    let subtotal: Money = lines.iter().map(|line| line.amount).sum();

    // Advance payment discount and deposit
    let advance = rules.advance(selection.advance_tier);
    let discount_amount = subtotal.share(advance.discount);
    let final_total = subtotal - discount_amount;
    let deposit_due = final_total.share(advance.deposit);

    Ok(Quote {
        base_package_id: base.id.clone(),
        subtotal,
        discount_bps: advance.discount,
        discount_amount,
        final_total,
        deposit_due,
        balance_on_completion: final_total - deposit_due,
        duration,
        estimated_duration_days: duration.ceil_days(),
        lines,
        skipped_add_ons,
    })
}

fn item_line(kind: QuoteLineKind, item: &CatalogItem) -> QuoteLine {
    QuoteLine {
        kind,
        item_id: Some(item.id.clone()),
        label: item.name.clone(),
        quantity: 1,
        amount: item.price,
        duration: item.duration,
    }
}

// =============================================================================
// Quote Engine
// =============================================================================

/// A catalog paired with the rules that price it.
///
/// ## Thread Safety
/// Read-only after construction; share it behind an `Arc` and call
/// [`QuoteEngine::quote`] from any number of requests without locking.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: Catalog,
    rules: PricingRules,
}

impl QuoteEngine {
    /// Pairs a catalog with a rule set, validating the rules.
    pub fn new(catalog: Catalog, rules: PricingRules) -> CoreResult<Self> {
        rules.validate()?;
        Ok(QuoteEngine { catalog, rules })
    }

    /// A catalog priced with the standard rules.
    pub fn standard(catalog: Catalog) -> Self {
        QuoteEngine {
            catalog,
            rules: PricingRules::standard(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Prices a selection against this engine's catalog and rules.
    pub fn quote(&self, selection: &ProjectSelection) -> CoreResult<Quote> {
        compute_quote_with(selection, &self.catalog, &self.rules)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
