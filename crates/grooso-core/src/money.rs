//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Whole Rupees, No Floats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront prices are whole rupees: ₹299, ₹44,990                     │
//! │                                                                         │
//! │  The only fractional step is GST (18%), which is rounded straight      │
//! │  back to whole rupees:                                                 │
//! │    ₹500 × 18% = ₹90                                                    │
//! │    ₹259 × 18% = ₹46.62 → ₹47                                           │
//! │                                                                         │
//! │  Rounding is done in integer basis-point math, never in f64.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Cart lines can come back from storage with any price and quantity, so
//! arithmetic saturates at the `i64` bounds instead of panicking.
//!
//! ## Usage
//! ```rust
//! use grooso_core::money::Money;
//!
//! let price = Money::from_rupees(299);
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.rupees(), 897);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction (savings, remaining-to-free-delivery)
///   can go through negative intermediates safely
/// - **Single field tuple struct**: serializes as a bare JSON number, which is
///   what the stored cart snapshot and the front end expect
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► LineItem.unit_price ──► line total ──► Cart subtotal
///                                                              │
///                               delivery fee ◄─────────────────┤
///                               tax (18%)    ◄─────────────────┤
///                                                              ▼
///                                                         Cart total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use grooso_core::money::Money;
    ///
    /// let price = Money::from_rupees(999);
    /// assert_eq!(price.rupees(), 999);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
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

    /// Clamps negative values to zero.
    ///
    /// ## Example
    /// ```rust
    /// use grooso_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(-20).non_negative(), Money::zero());
    /// assert_eq!(Money::from_rupees(20).non_negative().rupees(), 20);
    /// ```
    #[inline]
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            Money(self.0)
        }
    }

    /// Calculates tax at `rate`, rounded to whole rupees.
    ///
    /// ## Rounding
    /// Half rounds toward positive infinity, i.e. `floor(x + 0.5)`:
    /// ```text
    /// amount × bps / 10000          exact tax
    /// (amount × bps + 5000) / 10000 rounded, via Euclidean division
    /// ```
    /// Euclidean division keeps the same rule for negative amounts
    /// (-0.5 → 0, -1.5 → -1).
    ///
    /// ## Example
    /// ```rust
    /// use grooso_core::money::Money;
    /// use grooso_core::types::TaxRate;
    ///
    /// let gst = TaxRate::from_bps(1800);
    /// assert_eq!(Money::from_rupees(500).calculate_tax(gst).rupees(), 90);
    /// assert_eq!(Money::from_rupees(259).calculate_tax(gst).rupees(), 47);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large carts cannot overflow the intermediate product
        let scaled = self.0 as i128 * rate.bps() as i128 + 5000;
        Money::from_rupees(scaled.div_euclid(10_000) as i64)
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use grooso_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(249);
    /// assert_eq!(unit_price.multiply_quantity(2).rupees(), 498);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Percentage saved going from `original` to `current`, rounded.
    ///
    /// Returns 0 when `original` is missing, zero, or equal to `current`.
    ///
    /// ## Example
    /// ```rust
    /// use grooso_core::money::Money;
    ///
    /// let pct = Money::discount_percent(Some(Money::from_rupees(349)), Money::from_rupees(299));
    /// assert_eq!(pct, 14);
    /// ```
    pub fn discount_percent(original: Option<Money>, current: Money) -> i64 {
        let Some(original) = original else {
            return 0;
        };
        if original.is_zero() || original == current {
            return 0;
        }

        // round((original - current) / original × 100), half up
        let numerator = (original.0 as i128 - current.0 as i128) * 200 + original.0 as i128;
        numerator.div_euclid(2 * original.0 as i128) as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display (`₹1299`). Use `ConfigState::format_currency` for
/// grouped, user-facing output.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, self.0.abs())
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

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(1299)), "₹1299");
        assert_eq!(format!("{}", Money::from_rupees(0)), "₹0");
        assert_eq!(format!("{}", Money::from_rupees(-50)), "-₹50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1000);
        let b = Money::from_rupees(500);

        assert_eq!((a + b).rupees(), 1500);
        assert_eq!((a - b).rupees(), 500);
        assert_eq!((a * 3).rupees(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.rupees(), 2000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_rupees(i64::MAX);

        assert_eq!(max.multiply_quantity(2), max);
        assert_eq!(max + Money::from_rupees(50), max);
        let min = Money::from_rupees(i64::MIN);
        assert_eq!(min - Money::from_rupees(1), min);

        let mut acc = max;
        acc += max;
        assert_eq!(acc, max);

        let total: Money = vec![max, max, Money::from_rupees(1)].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_gst_exact() {
        let gst = TaxRate::from_bps(1800);
        assert_eq!(Money::from_rupees(500).calculate_tax(gst).rupees(), 90);
        assert_eq!(Money::from_rupees(1000).calculate_tax(gst).rupees(), 180);
    }

    #[test]
    fn test_gst_rounding() {
        let gst = TaxRate::from_bps(1800);
        // 259 × 0.18 = 46.62 → 47
        assert_eq!(Money::from_rupees(259).calculate_tax(gst).rupees(), 47);
        // 249 × 0.18 = 44.82 → 45
        assert_eq!(Money::from_rupees(249).calculate_tax(gst).rupees(), 45);
        // 998 × 0.18 = 179.64 → 180
        assert_eq!(Money::from_rupees(998).calculate_tax(gst).rupees(), 180);
        // 25 × 0.18 = 4.5 → 5 (half rounds up)
        assert_eq!(Money::from_rupees(25).calculate_tax(gst).rupees(), 5);
    }

    #[test]
    fn test_tax_rounding_negative_half() {
        let gst = TaxRate::from_bps(1800);
        // -25 × 0.18 = -4.5 → -4 (floor(x + 0.5))
        assert_eq!(Money::from_rupees(-25).calculate_tax(gst).rupees(), -4);
    }

    #[test]
    fn test_discount_percent() {
        let pct = |orig: i64, cur: i64| {
            Money::discount_percent(Some(Money::from_rupees(orig)), Money::from_rupees(cur))
        };
        // (349 - 299) / 349 = 14.33% → 14
        assert_eq!(pct(349, 299), 14);
        // (1299 - 999) / 1299 = 23.09% → 23
        assert_eq!(pct(1299, 999), 23);
        // (899 - 599) / 899 = 33.37% → 33
        assert_eq!(pct(899, 599), 33);
        // (200 - 100) / 200 = 50%
        assert_eq!(pct(200, 100), 50);
        // (8 - 7) / 8 = 12.5% → 13 (half rounds up)
        assert_eq!(pct(8, 7), 13);
    }

    #[test]
    fn test_discount_percent_extreme_prices() {
        // original - current would overflow i64
        let pct = Money::discount_percent(
            Some(Money::from_rupees(i64::MAX)),
            Money::from_rupees(i64::MIN),
        );
        assert_eq!(pct, 200);
    }

    #[test]
    fn test_discount_percent_without_original() {
        assert_eq!(Money::discount_percent(None, Money::from_rupees(299)), 0);
        assert_eq!(
            Money::discount_percent(Some(Money::from_rupees(299)), Money::from_rupees(299)),
            0
        );
        assert_eq!(
            Money::discount_percent(Some(Money::zero()), Money::from_rupees(10)),
            0
        );
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Money::from_rupees(-1).non_negative(), Money::zero());
        assert_eq!(Money::from_rupees(1).non_negative().rupees(), 1);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_rupees(260)).unwrap();
        assert_eq!(json, "260");
        let back: Money = serde_json::from_str("260").unwrap();
        assert_eq!(back.rupees(), 260);
    }
}
