//! # Domain Types
//!
//! Core value types used throughout Quoteforge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │     Quote       │   │   QuoteLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (business)  │   │  subtotal       │   │  kind           │       │
//! │  │  name           │   │  discount       │   │  label          │       │
//! │  │  price (Money)  │   │  final_total    │   │  amount         │       │
//! │  │  duration       │   │  duration       │   │  duration       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  BasisPoints    │   │   WorkDays      │   │ RushTier /      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │ AdvanceTier     │       │
//! │  │  bps (u32)      │   │  hundredths     │   │  radio choices  │       │
//! │  │  2500 = 25%     │   │  50 = 0.5 day   │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Basis Points
// =============================================================================

/// A rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (half advance payment discount)
/// 2500 bps = 25% (full advance payment discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// One hundred percent.
    pub const FULL: BasisPoints = BasisPoints(10_000);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        BasisPoints(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        BasisPoints(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for BasisPoints {
    fn default() -> Self {
        BasisPoints::zero()
    }
}

// =============================================================================
// Work Days
// =============================================================================

/// A duration of work in hundredths of a working day.
///
/// Catalog items carry fractional durations (a dark mode toggle is half a
/// day), so the unit is fixed-point like [`Money`]: 50 = 0.5 day,
/// 300 = 3 days.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct WorkDays(u64);

impl WorkDays {
    const SCALE: u64 = 100;

    /// Creates a duration from hundredths of a day.
    #[inline]
    pub const fn from_hundredths(hundredths: u64) -> Self {
        WorkDays(hundredths)
    }

    /// Creates a duration of whole days.
    #[inline]
    pub const fn from_days(days: u64) -> Self {
        WorkDays(days.saturating_mul(Self::SCALE))
    }

    /// Half a day, the smallest duration the catalogs use.
    #[inline]
    pub const fn half_day() -> Self {
        WorkDays(Self::SCALE / 2)
    }

    #[inline]
    pub const fn zero() -> Self {
        WorkDays(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the raw value in hundredths of a day.
    #[inline]
    pub const fn hundredths(&self) -> u64 {
        self.0
    }

    /// Multiplies the duration by a unit count, saturating.
    #[inline]
    pub const fn multiply_units(&self, units: u64) -> Self {
        WorkDays(self.0.saturating_mul(units))
    }

    /// Rounds up to whole days. Never floors: 0.5 day is 1 day.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::types::WorkDays;
    ///
    /// assert_eq!(WorkDays::from_hundredths(350).ceil_days(), 4);
    /// assert_eq!(WorkDays::from_days(3).ceil_days(), 3);
    /// assert_eq!(WorkDays::zero().ceil_days(), 0);
    /// ```
    #[inline]
    pub const fn ceil_days(&self) -> u64 {
        self.0.div_ceil(Self::SCALE)
    }

    /// Divides the duration by `divisor` and rounds up to a whole day.
    ///
    /// This is the rush delivery shrink: `ceil(D / divisor)` days.
    /// A divisor of 0 or 1 leaves the duration untouched.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::types::WorkDays;
    ///
    /// // 5 days at quarter speed = ceil(1.25) = 2 days
    /// let shrunk = WorkDays::from_days(5).shrink_by(4);
    /// assert_eq!(shrunk, WorkDays::from_days(2));
    /// ```
    pub const fn shrink_by(&self, divisor: u32) -> Self {
        if divisor <= 1 {
            return *self;
        }
        let whole_days = self.0.div_ceil(Self::SCALE * divisor as u64);
        WorkDays(whole_days.saturating_mul(Self::SCALE))
    }

    /// Returns the duration in days as a float (for wire output only).
    #[inline]
    pub fn to_days(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for WorkDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        let unit = if self.0 == Self::SCALE { "day" } else { "days" };

        if frac == 0 {
            write!(f, "{} {}", whole, unit)
        } else if frac % 10 == 0 {
            write!(f, "{}.{} {}", whole, frac / 10, unit)
        } else {
            write!(f, "{}.{:02} {}", whole, frac, unit)
        }
    }
}

impl Add for WorkDays {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorkDays(self.0.saturating_add(other.0))
    }
}

impl AddAssign for WorkDays {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for WorkDays {
    fn sum<I: Iterator<Item = WorkDays>>(iter: I) -> Self {
        iter.fold(WorkDays::zero(), |acc, d| acc + d)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable unit of work: a package, a page, or an add-on feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique business key, e.g. `dark-mode`.
    pub id: String,

    /// Display name shown in the picker and on the quote.
    pub name: String,

    /// Price of the item.
    pub price: Money,

    /// Work the item adds to the estimate.
    pub duration: WorkDays,

    /// Grouping tag for the UI. Never used in pricing.
    pub category: String,
}

impl CatalogItem {
    /// Creates a catalog item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        duration: WorkDays,
        category: impl Into<String>,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            price,
            duration,
            category: category.into(),
        }
    }
}

// =============================================================================
// Option Tiers
// =============================================================================

/// Delivery speed accelerator. Exactly one is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RushTier {
    /// Normal timeline.
    #[default]
    None,
    /// 50% faster: timeline halved.
    Half,
    /// 75% faster: timeline quartered.
    Quarter,
}

impl RushTier {
    pub const ALL: [RushTier; 3] = [RushTier::None, RushTier::Half, RushTier::Quarter];

    /// Human-readable label for quote lines.
    pub const fn label(&self) -> &'static str {
        match self {
            RushTier::None => "Standard Delivery",
            RushTier::Half => "Rush Delivery (50% faster)",
            RushTier::Quarter => "Express Delivery (75% faster)",
        }
    }
}

/// Prepayment choice that determines the discount rate. Exactly one is selected.
///
/// ## Wire Names
/// `none`, `fifty`, `full` - the values the order form has always posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AdvanceTier {
    /// Standard payment: small deposit, balance on completion.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Half of the total paid in advance.
    #[serde(rename = "fifty")]
    Half,
    /// Everything paid in advance.
    #[serde(rename = "full")]
    Full,
}

impl AdvanceTier {
    pub const ALL: [AdvanceTier; 3] = [AdvanceTier::None, AdvanceTier::Half, AdvanceTier::Full];

    pub const fn label(&self) -> &'static str {
        match self {
            AdvanceTier::None => "Standard Payment",
            AdvanceTier::Half => "50% Advance Payment",
            AdvanceTier::Full => "Full Advance Payment",
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// What a quote line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuoteLineKind {
    Package,
    ExtraUnits,
    AddOn,
    RushDelivery,
    OwnershipRights,
}

/// One itemized row of a quote. Line amounts add up to the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub kind: QuoteLineKind,
    /// Catalog id for package and add-on lines.
    pub item_id: Option<String>,
    pub label: String,
    pub quantity: u64,
    pub amount: Money,
    /// Duration contributed before the rush transform.
    pub duration: WorkDays,
}

/// The computed result of pricing a selection.
///
/// A quote has no identity and is never stored: it is recomputed from the
/// selection on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Base package the quote was built on.
    pub base_package_id: String,

    /// Package + extras + add-ons + rush surcharge + ownership surcharge.
    pub subtotal: Money,

    /// Rate implied by the advance tier.
    pub discount_bps: BasisPoints,

    /// `subtotal × discount_bps`, half-up on the cent.
    pub discount_amount: Money,

    /// `subtotal - discount_amount`.
    pub final_total: Money,

    /// Upfront payment implied by the advance tier.
    pub deposit_due: Money,

    /// `final_total - deposit_due`.
    pub balance_on_completion: Money,

    /// Summed duration after the rush transform, before display rounding.
    pub duration: WorkDays,

    /// `duration` rounded up to whole days.
    pub estimated_duration_days: u64,

    /// Itemized breakdown.
    pub lines: Vec<QuoteLine>,

    /// Add-on ids ignored in lenient lookup mode.
    pub skipped_add_ons: Vec<String>,
}

impl Quote {
    /// Lines contributed by add-ons, in id order.
    pub fn add_on_lines(&self) -> impl Iterator<Item = &QuoteLine> {
        self.lines
            .iter()
            .filter(|line| line.kind == QuoteLineKind::AddOn)
    }

    /// Checks whether any part of the selection was ignored.
    pub fn is_partial(&self) -> bool {
        !self.skipped_add_ons.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
