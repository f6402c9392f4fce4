//! # Domain Types
//!
//! Catalog-side types the cart reads from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    OrderType    │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Express        │   │  bps (u32)      │       │
//! │  │  name           │   │  Citymart       │   │  1800 = 18%     │       │
//! │  │  price          │   │  Nationwide     │   └─────────────────┘       │
//! │  │  original_price │   └─────────────────┘                              │
//! │  │  in_stock       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are owned by the catalog. The cart copies the fields it needs at
//! add time and never looks the product up again.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so GST at 18% is 1800 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Order Type
// =============================================================================

/// The storefront vertical a product is sold through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Restaurant food delivered in ~30 minutes.
    Express,
    /// Groceries and daily needs from city stores.
    Citymart,
    /// Retail goods shipped nationwide.
    Nationwide,
}

impl OrderType {
    /// Wire name, as used in fixtures and CLI flags.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderType::Express => "express",
            OrderType::Citymart => "citymart",
            OrderType::Nationwide => "nationwide",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(OrderType::Express),
            "citymart" => Ok(OrderType::Citymart),
            "nationwide" => Ok(OrderType::Nationwide),
            other => Err(format!(
                "unknown order type '{other}' (expected express, citymart or nationwide)"
            )),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Catalog category ("Electronics", "Food & Beverages", ...).
    pub category: String,

    /// Current selling price.
    pub price: Money,

    /// Pre-discount price, shown struck through.
    pub original_price: Option<Money>,

    /// Image URL.
    pub image: Option<String>,

    /// Average rating out of 5.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub reviews: u32,

    /// Whether the product can currently be ordered.
    pub in_stock: bool,

    /// Restaurant or store fulfilling the product.
    pub vendor: String,

    pub description: String,

    /// Short selling points.
    pub features: Vec<String>,

    /// Vertical the product belongs to.
    pub order_type: OrderType,
}

impl Product {
    /// Percentage off the original price, rounded (0 without a discount).
    #[inline]
    pub fn discount_percent(&self) -> i64 {
        Money::discount_percent(self.original_price, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
