//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    670 × 0.25 may land on 167.49999999 or 167.50000001                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    67000 cents × 2500 bps / 10000 = 16750 cents, exactly                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quoteforge_core::money::Money;
//!
//! let package = Money::from_major(150);        // $150.00
//! let pages = Money::from_major(80) * 2;       // $160.00
//! assert_eq!((package + pages).cents(), 31000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::BasisPoints;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps, discounts are plain `Money`
/// - **Single field tuple struct**: serializes as a bare integer of cents
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.price ──┬──► QuoteLine.amount ──► Quote.subtotal
///                     │                              │
///                     │                 discount ◄───┤
///                     │                              ▼
///                     └──► "$150.00" in UI      Quote.final_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units (dollars).
    ///
    /// Catalog prices are quoted in whole dollars, so this is the usual
    /// constructor for catalog tables and rule constants.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    ///
    /// let price = Money::from_major_minor(167, 50); // $167.50
    /// assert_eq!(price.cents(), 16750);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in major units as a float.
    ///
    /// ## Note
    /// For wire output and display ONLY. Never feed the result back into
    /// a calculation.
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a unit count, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    ///
    /// let per_page = Money::from_major(80);
    /// assert_eq!(per_page.multiply_quantity(2).cents(), 16000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns the share of this amount given by a rate in basis points.
    ///
    /// ## Rounding
    /// Half-up on the cent: `(amount × bps + 5000) / 10000`.
    /// i128 keeps the intermediate product from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    /// use quoteforge_core::types::BasisPoints;
    ///
    /// let subtotal = Money::from_major(670);
    /// let discount = subtotal.share(BasisPoints::from_bps(2500)); // 25%
    /// assert_eq!(discount.cents(), 16750); // $167.50
    /// ```
    pub fn share(&self, rate: BasisPoints) -> Money {
        let share = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(share as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$150.00`.
///
/// ## Note
/// The presentation layer owns localized formatting; this is for logs,
/// summaries and tests.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(150).cents(), 15000);
        assert_eq!(Money::from_major(0), Money::zero());
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(502, 50).cents(), 50250);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(50250)), "$502.50");
        assert_eq!(format!("{}", Money::from_major(150)), "$150.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(310);
        let b = Money::from_major(360);

        assert_eq!((a + b).cents(), 67000);
        assert_eq!((b - a).cents(), 5000);
        assert_eq!((Money::from_major(80) * 3).cents(), 24000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [150, 80, 80]
            .into_iter()
            .map(Money::from_major)
            .sum();
        assert_eq!(total, Money::from_major(310));
    }

    #[test]
    fn test_share_exact() {
        let subtotal = Money::from_major(670);
        assert_eq!(subtotal.share(BasisPoints::from_bps(2500)).cents(), 16750);
        assert_eq!(subtotal.share(BasisPoints::from_bps(1000)).cents(), 6700);
        assert_eq!(subtotal.share(BasisPoints::zero()), Money::zero());
    }

    #[test]
    fn test_share_rounds_half_up() {
        // 0.15 × 10% = 0.015 → 0.02
        let amount = Money::from_cents(15);
        assert_eq!(amount.share(BasisPoints::from_bps(1000)).cents(), 2);
        // 0.14 × 10% = 0.014 → 0.01
        let amount = Money::from_cents(14);
        assert_eq!(amount.share(BasisPoints::from_bps(1000)).cents(), 1);
    }

    #[test]
    fn test_share_full_rate_is_identity() {
        let amount = Money::from_cents(12345);
        assert_eq!(amount.share(BasisPoints::from_bps(10000)), amount);
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let price = Money::from_major(80);
        assert_eq!(price.multiply_quantity(i64::MAX).cents(), i64::MAX);
    }

    #[test]
    fn test_to_major_units() {
        assert!((Money::from_cents(50250).to_major_units() - 502.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-100).is_negative());
    }
}
