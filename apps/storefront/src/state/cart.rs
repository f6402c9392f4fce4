//! # Cart Store
//!
//! The session's authoritative cart: line items, derived totals, the drawer
//! visibility flag, and the write-through mirror into durable storage.
//!
//! ## Ownership
//! One `CartStore` is built at startup and handed to commands by `&mut`.
//! There is no global cart and no lock: the session is single-threaded and
//! every event runs to completion before the next one starts.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Caller Action            CartStore               Side effect           │
//! │  ─────────────            ─────────               ───────────           │
//! │                                                                         │
//! │  startup ────────────────► open(persistence) ───► load() snapshot       │
//! │                                                                         │
//! │  Click Add ──────────────► add_item() ──────────► save(all items)       │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► save(all items)       │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► save(all items)       │
//! │                                                                         │
//! │  Clear / Logout ─────────► clear() ─────────────► save([])              │
//! │                                                                         │
//! │  View Cart ──────────────► totals() ────────────► (read only)           │
//! │                                                                         │
//! │  NOTE: memory is updated first; a failed save is logged and the        │
//! │        in-memory cart stays as it is.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use grooso_core::{Cart, CartTotals, LineItem, Money, Product};
use grooso_store::CartPersistence;
use tracing::{debug, error};

/// Session-owned cart with write-through persistence.
pub struct CartStore {
    cart: Cart,
    is_open: bool,
    persistence: Box<dyn CartPersistence>,
}

impl CartStore {
    /// Creates the store, hydrating from `persistence`.
    ///
    /// A missing or unreadable snapshot yields an empty cart.
    pub fn open(persistence: impl CartPersistence + 'static) -> Self {
        let cart = persistence.load();
        debug!(lines = cart.line_count(), "Cart store opened");
        CartStore {
            cart,
            is_open: false,
            persistence: Box::new(persistence),
        }
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    // -------------------------------------------------------------------------
    // Mutations (each one persists)
    // -------------------------------------------------------------------------

    /// Adds `quantity` of `product`, merging with an existing line.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        self.cart.add_item(product, quantity);
        self.persist();
    }

    /// Removes a line. Returns the removed line, `None` if it wasn't there.
    pub fn remove_item(&mut self, product_id: &str) -> Option<LineItem> {
        let removed = self.cart.remove_item(product_id);
        self.persist();
        removed
    }

    /// Sets a line's quantity; `quantity <= 0` removes it.
    ///
    /// Returns `true` if the product was in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        let found = self.cart.update_quantity(product_id, quantity);
        self.persist();
        found
    }

    /// Empties the cart and persists the empty state.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(self.cart.items()) {
            error!(
                error = %e,
                lines = self.cart.line_count(),
                "Failed to persist cart, keeping in-memory state"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Derived totals
    // -------------------------------------------------------------------------

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn delivery_fee(&self) -> Money {
        self.cart.delivery_fee()
    }

    pub fn tax(&self) -> Money {
        self.cart.tax()
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // -------------------------------------------------------------------------
    // Visibility (display state only, never persisted)
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flips the drawer flag and returns the new value.
    pub fn toggle_visibility(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn set_visibility(&mut self, open: bool) {
        self.is_open = open;
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}
