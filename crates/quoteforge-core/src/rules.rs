//! # Pricing Rules
//!
//! Every constant the engine applies, in one value.
//!
//! ## Standard Rule Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Extra unit (page)      +$80.00      +1 day each                        │
//! │  Rush: half             +$100.00     duration → ceil(D / 2)             │
//! │  Rush: quarter          +$360.00     duration → ceil(D / 4)             │
//! │  Ownership rights       +$60.00                                         │
//! │  Advance: none          0% off       10% deposit, 90% on completion     │
//! │  Advance: fifty         10% off      50% deposit                        │
//! │  Advance: full          25% off      100% upfront                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{AdvanceTier, BasisPoints, RushTier, WorkDays};
use crate::validation::validate_rate_bps;

/// Flat price of one extra unit (page).
pub const EXTRA_UNIT_PRICE: Money = Money::from_major(80);

/// Duration of one extra unit (page).
pub const EXTRA_UNIT_DURATION: WorkDays = WorkDays::from_days(1);

/// Surcharge for halving the timeline.
pub const RUSH_HALF_FEE: Money = Money::from_major(100);

/// Surcharge for quartering the timeline.
pub const RUSH_QUARTER_FEE: Money = Money::from_major(360);

/// Surcharge for transferring code ownership to the client.
pub const OWNERSHIP_FEE: Money = Money::from_major(60);

/// Upper bound on extra units accepted at the service boundary.
pub const MAX_EXTRA_UNITS: i64 = 999;

// =============================================================================
// Lookup Mode
// =============================================================================

/// What the engine does with an add-on id the catalog doesn't know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Reject the whole selection with `UnknownCatalogItem`.
    #[default]
    Strict,
    /// Skip the add-on and list it in `Quote::skipped_add_ons`.
    ///
    /// The base package must still resolve.
    Lenient,
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(LookupMode::Strict),
            "lenient" => Ok(LookupMode::Lenient),
            other => Err(format!("unknown lookup mode: {}", other)),
        }
    }
}

// =============================================================================
// Rush & Advance Terms
// =============================================================================

/// Cost and speed-up of one rush tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RushTerms {
    pub fee: Money,
    /// Summed duration is divided by this and rounded up to whole days.
    /// 1 means unchanged.
    pub divisor: u32,
}

/// Discount and deposit of one advance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceTerms {
    pub discount: BasisPoints,
    /// Share of the final total due before work starts.
    pub deposit: BasisPoints,
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// The full constant set the engine applies.
///
/// Two catalogs share one rule set today; a profile with different
/// constants only needs a different `PricingRules` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRules {
    pub extra_unit_price: Money,
    pub extra_unit_duration: WorkDays,
    pub rush_none: RushTerms,
    pub rush_half: RushTerms,
    pub rush_quarter: RushTerms,
    pub ownership_fee: Money,
    pub advance_none: AdvanceTerms,
    pub advance_half: AdvanceTerms,
    pub advance_full: AdvanceTerms,
    pub lookup: LookupMode,
}

impl PricingRules {
    /// The rule set both the calculator and the order form price with.
    pub const fn standard() -> Self {
        PricingRules {
            extra_unit_price: EXTRA_UNIT_PRICE,
            extra_unit_duration: EXTRA_UNIT_DURATION,
            rush_none: RushTerms {
                fee: Money::zero(),
                divisor: 1,
            },
            rush_half: RushTerms {
                fee: RUSH_HALF_FEE,
                divisor: 2,
            },
            rush_quarter: RushTerms {
                fee: RUSH_QUARTER_FEE,
                divisor: 4,
            },
            ownership_fee: OWNERSHIP_FEE,
            advance_none: AdvanceTerms {
                discount: BasisPoints::zero(),
                deposit: BasisPoints::from_bps(1000),
            },
            advance_half: AdvanceTerms {
                discount: BasisPoints::from_bps(1000),
                deposit: BasisPoints::from_bps(5000),
            },
            advance_full: AdvanceTerms {
                discount: BasisPoints::from_bps(2500),
                deposit: BasisPoints::FULL,
            },
            lookup: LookupMode::Strict,
        }
    }

    /// Returns a copy with a different lookup mode.
    pub fn with_lookup(mut self, lookup: LookupMode) -> Self {
        self.lookup = lookup;
        self
    }

    /// Terms for a rush tier.
    pub const fn rush(&self, tier: RushTier) -> RushTerms {
        match tier {
            RushTier::None => self.rush_none,
            RushTier::Half => self.rush_half,
            RushTier::Quarter => self.rush_quarter,
        }
    }

    /// Terms for an advance tier.
    pub const fn advance(&self, tier: AdvanceTier) -> AdvanceTerms {
        match tier {
            AdvanceTier::None => self.advance_none,
            AdvanceTier::Half => self.advance_half,
            AdvanceTier::Full => self.advance_full,
        }
    }

    /// Checks the rule set is usable.
    ///
    /// ## Rules
    /// - Discount and deposit rates are within 0-100%
    /// - Rush divisors are at least 1
    /// - Fees and the extra unit price are non-negative
    pub fn validate(&self) -> CoreResult<()> {
        for tier in AdvanceTier::ALL {
            let terms = self.advance(tier);
            validate_rate_bps("discount", terms.discount.bps())
                .and_then(|_| validate_rate_bps("deposit", terms.deposit.bps()))
                .map_err(|e| CoreError::InvalidRules {
                    reason: format!("{} for {:?}", e, tier),
                })?;
        }

        for tier in RushTier::ALL {
            let terms = self.rush(tier);
            if terms.divisor == 0 {
                return Err(CoreError::InvalidRules {
                    reason: format!("rush divisor for {:?} must be at least 1", tier),
                });
            }
            if terms.fee.is_negative() {
                return Err(CoreError::InvalidRules {
                    reason: format!("rush fee for {:?} must not be negative", tier),
                });
            }
        }

        if self.extra_unit_price.is_negative() || self.ownership_fee.is_negative() {
            return Err(CoreError::InvalidRules {
                reason: "surcharges must not be negative".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
