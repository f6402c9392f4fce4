//! # Cart
//!
//! The line-item collection and every total derived from it.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(p, n)          id present?  yes ──► quantity += n             │
//! │                                       no  ──► push snapshot of p        │
//! │                                                                         │
//! │  update_quantity(id, n)  n <= 0       ──► remove_item(id)               │
//! │                          id present   ──► quantity = n                  │
//! │                          id absent    ──► no-op (never inserts)         │
//! │                                                                         │
//! │  remove_item(id)         retain everything but id (no-op if absent)     │
//! │                                                                         │
//! │  clear()                 items = []                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `product_id`
//! - Every stored quantity is >= 1
//! - Prices are frozen when a product is first added

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::{self, CartTotals};
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Snapshot Fields
/// `name`, `unit_price` and `original_unit_price` are copied from the product
/// at first add. If the catalog price changes later, this line keeps the old
/// price until the product is removed and added again.
///
/// ## Stored Shape
/// ```json
/// { "productId": "14", "name": "Wireless", "unitPrice": 999,
///   "originalUnitPrice": 1299, "quantity": 2, "category": "Electronics" }
/// ```
/// The aliases accept snapshots written by the browser storefront, which
/// stored the whole product (`id`, `price`, `originalPrice`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog product this line refers to.
    #[serde(alias = "id")]
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price at time of adding (frozen).
    #[serde(alias = "price")]
    pub unit_price: Money,

    /// Pre-discount price at time of adding (frozen).
    #[serde(default, alias = "originalPrice", skip_serializing_if = "Option::is_none")]
    pub original_unit_price: Option<Money>,

    /// Quantity in cart, always >= 1.
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LineItem {
    /// Creates a line from a product, freezing its current price fields.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            original_unit_price: product.original_price,
            quantity,
            category: Some(product.category.clone()),
            vendor: Some(product.vendor.clone()),
            image: product.image.clone(),
        }
    }

    /// unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Amount saved on this line against the original price.
    pub fn line_savings(&self) -> Money {
        match self.original_unit_price {
            Some(original) if original > self.unit_price => {
                (original - self.unit_price).multiply_quantity(self.quantity)
            }
            _ => Money::zero(),
        }
    }

    #[inline]
    pub fn discount_percent(&self) -> i64 {
        Money::discount_percent(self.original_unit_price, self.unit_price)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of line items.
///
/// Serializes as a bare JSON array of line items, which is exactly the stored
/// snapshot format. Deserializing goes through [`Cart::from_items`], so a
/// decoded cart always satisfies the invariants above.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from previously stored lines, repairing invariant
    /// violations.
    ///
    /// - lines with quantity 0 are dropped
    /// - repeated product ids are merged into the first occurrence
    ///
    /// Order of first occurrence is preserved.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.find_mut(&item.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consumes the cart, returning its lines.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Looks up the line for a product.
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`, the
    ///   frozen price is kept
    /// - Product not in cart: a new line is appended with the product's
    ///   current price
    /// - `quantity == 0`: nothing changes
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(item) = self.find_mut(&product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(LineItem::from_product(product, quantity));
    }

    /// Removes the line for `product_id`, returning it if it was present.
    pub fn remove_item(&mut self, product_id: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.product_id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - product not in cart: no-op, nothing is inserted
    ///
    /// Returns `true` if a line was found (and updated or removed).
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id).is_some();
        }

        match self.find_mut(product_id) {
            Some(item) => {
                item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities (not the number of distinct products).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn delivery_fee(&self) -> Money {
        pricing::delivery_fee(self.subtotal())
    }

    pub fn tax(&self) -> Money {
        pricing::tax(self.subtotal())
    }

    /// subtotal + delivery fee + tax.
    pub fn total(&self) -> Money {
        pricing::total(self.subtotal())
    }

    pub fn savings(&self) -> Money {
        self.items.iter().map(LineItem::line_savings).sum()
    }

    pub fn amount_until_free_delivery(&self) -> Money {
        pricing::amount_until_free_delivery(self.subtotal())
    }

    /// All derived totals in one pass over the subtotal.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        CartTotals {
            item_count: self.item_count(),
            line_count: self.line_count(),
            subtotal,
            delivery_fee: pricing::delivery_fee(subtotal),
            tax: pricing::tax(subtotal),
            total: pricing::total(subtotal),
            savings: self.savings(),
            amount_until_free_delivery: pricing::amount_until_free_delivery(subtotal),
        }
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.into_items()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
