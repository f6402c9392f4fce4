//! # Pricing Rules
//!
//! Everything the cart derives from its subtotal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = Σ unit_price × quantity                                     │
//! │                                                                         │
//! │  delivery = 0             if subtotal >= ₹999                           │
//! │           = ₹50           otherwise                                     │
//! │                                                                         │
//! │  tax      = round(subtotal × 18%)                                       │
//! │                                                                         │
//! │  total    = subtotal + delivery + tax                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is stored. Totals are recomputed from the line items on every
//! read.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{FLAT_DELIVERY_FEE, FREE_DELIVERY_THRESHOLD, TAX_RATE};

/// Delivery fee for a given subtotal.
///
/// ## Example
/// ```rust
/// use grooso_core::money::Money;
/// use grooso_core::pricing::delivery_fee;
///
/// assert_eq!(delivery_fee(Money::from_rupees(999)).rupees(), 0);
/// assert_eq!(delivery_fee(Money::from_rupees(998)).rupees(), 50);
/// ```
pub fn delivery_fee(subtotal: Money) -> Money {
    if subtotal >= FREE_DELIVERY_THRESHOLD {
        Money::zero()
    } else {
        FLAT_DELIVERY_FEE
    }
}

/// GST on a subtotal, rounded to whole rupees.
pub fn tax(subtotal: Money) -> Money {
    subtotal.calculate_tax(TAX_RATE)
}

/// Grand total: subtotal + delivery fee + tax.
pub fn total(subtotal: Money) -> Money {
    subtotal + delivery_fee(subtotal) + tax(subtotal)
}

/// How much more the customer must add to qualify for free delivery.
///
/// Zero once the threshold is reached.
pub fn amount_until_free_delivery(subtotal: Money) -> Money {
    (FREE_DELIVERY_THRESHOLD - subtotal).non_negative()
}

/// Cart totals summary for responses and order snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub item_count: u64,
    /// Number of distinct products.
    pub line_count: usize,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub tax: Money,
    pub total: Money,
    /// Σ (original − unit price) × quantity.
    pub savings: Money,
    pub amount_until_free_delivery: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_example() {
        let subtotal = Money::from_rupees(500);
        assert_eq!(delivery_fee(subtotal).rupees(), 50);
        assert_eq!(tax(subtotal).rupees(), 90);
        assert_eq!(total(subtotal).rupees(), 640);
    }

    #[test]
    fn test_free_delivery_boundary() {
        assert_eq!(delivery_fee(Money::from_rupees(999)), Money::zero());
        assert_eq!(delivery_fee(Money::from_rupees(998)).rupees(), 50);
        assert_eq!(delivery_fee(Money::from_rupees(44990)), Money::zero());
    }

    #[test]
    fn test_empty_subtotal_still_charges_delivery() {
        // An empty cart is below the threshold; callers hide totals for empty carts.
        let subtotal = Money::zero();
        assert_eq!(delivery_fee(subtotal).rupees(), 50);
        assert_eq!(tax(subtotal), Money::zero());
        assert_eq!(total(subtotal).rupees(), 50);
    }

    #[test]
    fn test_total_above_threshold() {
        // 1299 + 0 + round(233.82) = 1299 + 234
        assert_eq!(total(Money::from_rupees(1299)).rupees(), 1533);
    }

    #[test]
    fn test_amount_until_free_delivery() {
        assert_eq!(amount_until_free_delivery(Money::from_rupees(500)).rupees(), 499);
        assert_eq!(amount_until_free_delivery(Money::from_rupees(999)), Money::zero());
        assert_eq!(amount_until_free_delivery(Money::from_rupees(5000)), Money::zero());
    }
}
