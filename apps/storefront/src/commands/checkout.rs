//! # Checkout Commands
//!
//! Turns the cart into an order. There is no payment step: placing the order
//! snapshots the cart and empties it.
//!
//! ```text
//! place_order(address)
//!     │
//!     ├── cart empty?      → EMPTY_CART
//!     ├── address blank?   → VALIDATION_ERROR
//!     │
//!     ├── Order::from_cart (lines, totals, GRO-<year>-<NNNN>, pending)
//!     └── cart.clear()     (persists the empty cart)
//! ```

use chrono::Utc;
use grooso_core::Order;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::CartStore;

/// Places an order for everything in the cart.
///
/// ## Returns
/// The order snapshot. The cart is empty afterwards.
pub fn place_order(cart: &mut CartStore, delivery_address: &str) -> Result<Order, ApiError> {
    debug!(lines = cart.items().len(), "place_order command");

    let order = Order::from_cart(cart.cart(), delivery_address, Uuid::new_v4(), Utc::now())?;
    cart.clear();

    info!(
        order_id = %order.id,
        order_number = %order.order_number,
        total = %order.totals.total,
        "Order placed"
    );

    Ok(order)
}
