//! # Order Snapshot
//!
//! The immutable record produced when a cart is checked out.
//!
//! ```text
//! Cart ──► Order::from_cart(cart, address, id, now)
//!            │
//!            ├── lines: {productId, name, price, quantity} per cart line
//!            ├── totals: frozen CartTotals
//!            ├── order_number: GRO-<year>-<4 digits>
//!            └── status: pending
//! ```
//!
//! Identifiers and timestamps are passed in so this stays pure; the storefront
//! supplies `Uuid::new_v4()` and `Utc::now()`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, LineItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::CartTotals;
use crate::validation::validate_delivery_address;
use crate::ORDER_NUMBER_PREFIX;

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet accepted by the vendor.
    #[default]
    Pending,
    Confirmed,
    /// A delivery partner has been assigned.
    Assigned,
    InTransit,
    Delivered,
    Cancelled,
}

// =============================================================================
// Order Line
// =============================================================================

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    /// Unit price charged (the cart's frozen price).
    pub price: Money,
    pub quantity: u32,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        OrderLine {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Human-readable number shown on the confirmation page.
    pub order_number: String,
    pub lines: Vec<OrderLine>,
    pub totals: CartTotals,
    pub delivery_address: String,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from the current cart contents.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`] if the cart has no lines
    /// - [`CoreError::Validation`] if the address is blank or too long
    pub fn from_cart(
        cart: &Cart,
        delivery_address: &str,
        id: Uuid,
        placed_at: DateTime<Utc>,
    ) -> CoreResult<Order> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let delivery_address = validate_delivery_address(delivery_address)?;

        Ok(Order {
            id: id.to_string(),
            order_number: order_number(placed_at, &id),
            lines: cart.items().iter().map(OrderLine::from).collect(),
            totals: cart.totals(),
            delivery_address,
            status: OrderStatus::Pending,
            placed_at,
        })
    }
}

/// Formats `GRO-<year>-<NNNN>`.
///
/// The four digits come from the first two bytes of the order id, so the
/// number is stable for a given order.
pub fn order_number(placed_at: DateTime<Utc>, id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let suffix = u16::from_be_bytes([bytes[0], bytes[1]]) % 10_000;
    format!("{}-{}-{:04}", ORDER_NUMBER_PREFIX, placed_at.year(), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================
