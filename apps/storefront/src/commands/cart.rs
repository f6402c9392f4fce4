//! # Cart Commands
//!
//! Commands behind the storefront's cart controls.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Page    │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_cart_item  (checkout.rs)                      │
//! │                   remove_from_cart       │                              │
//! │                        │                 │                              │
//! │                        ▼                 ▼                              │
//! │                   clear_cart ─────► (back to empty) ◄── logout         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grooso_core::validation::{validate_add_quantity, validate_product_id};
use grooso_core::{CartTotals, CoreError, LineItem};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::CatalogProvider;
use crate::error::ApiError;
use crate::state::CartStore;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    /// Whether the cart drawer is open
    pub is_open: bool,
}

impl From<&CartStore> for CartResponse {
    fn from(store: &CartStore) -> Self {
        CartResponse {
            items: store.items().to_vec(),
            totals: store.totals(),
            is_open: store.is_open(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new line
/// - Price is "frozen" at time of adding (later catalog changes don't reach
///   the line)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User clicks "Add to Cart" on a product card                           │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look the product up in the catalog (current price)         │    │
/// │  │  2. Refuse if it's out of stock                                │    │
/// │  │  3. Merge into an existing line or append a new one            │    │
/// │  │  4. Persist and return the updated cart                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  "Chicken Biryani added to cart"                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1, zero is rejected)
pub fn add_to_cart(
    catalog: &dyn CatalogProvider,
    cart: &mut CartStore,
    product_id: &str,
    quantity: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let quantity = validate_add_quantity(quantity.unwrap_or(1))?;
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, quantity, "add_to_cart command");

    let product = catalog
        .product(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    if !product.in_stock {
        return Err(CoreError::OutOfStock {
            product_id: product.id,
            name: product.name,
        }
        .into());
    }

    cart.add_item(&product, quantity);
    info!(product_id = %product.id, quantity, "{} added to cart", product.name);

    Ok(CartResponse::from(&*cart))
}

/// Updates the quantity of an item in the cart.
///
/// ## Behavior
/// - quantity > 0: sets the quantity
/// - quantity <= 0: removes the line
/// - unknown product: nothing changes
pub fn update_cart_item(
    cart: &mut CartStore,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, quantity, "update_cart_item command");

    if !cart.update_quantity(product_id, quantity) {
        debug!(product_id = %product_id, "Product not in cart, nothing to update");
    }

    Ok(CartResponse::from(&*cart))
}

/// Removes a line from the cart. Removing an absent product is a no-op.
pub fn remove_from_cart(cart: &mut CartStore, product_id: &str) -> Result<CartResponse, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, "remove_from_cart command");

    if let Some(line) = cart.remove_item(product_id) {
        info!(product_id = %product_id, "{} removed from cart", line.name);
    }

    Ok(CartResponse::from(&*cart))
}

/// Empties the cart.
pub fn clear_cart(cart: &mut CartStore) -> CartResponse {
    debug!("clear_cart command");
    cart.clear();
    CartResponse::from(&*cart)
}

/// Opens or closes the cart drawer. Returns the new state.
pub fn toggle_cart(cart: &mut CartStore) -> bool {
    let open = cart.toggle_visibility();
    debug!(open, "toggle_cart command");
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixtureCatalog;
    use crate::error::ErrorCode;
    use grooso_core::{Money, Product};
    use grooso_store::{KvCartPersistence, MemoryStore};
    use std::sync::Arc;

    fn new_cart() -> CartStore {
        CartStore::open(KvCartPersistence::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_to_cart_defaults_to_one() {
        let catalog = FixtureCatalog::new();
        let mut cart = new_cart();

        let response = add_to_cart(&catalog, &mut cart, "1", None).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 1);
        assert_eq!(response.totals.subtotal.rupees(), 299);
        assert_eq!(response.totals.delivery_fee.rupees(), 50);
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let catalog = FixtureCatalog::new();
        let mut cart = new_cart();

        add_to_cart(&catalog, &mut cart, "2", Some(1)).unwrap();
        let response = add_to_cart(&catalog, &mut cart, "2", Some(3)).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.item_count, 4);
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = FixtureCatalog::new();
        let mut cart = new_cart();

        let err = add_to_cart(&catalog, &mut cart, "404", None).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_out_of_stock_product() {
        let catalog = FixtureCatalog::new();
        let mut cart = new_cart();

        let err = add_to_cart(&catalog, &mut cart, "8", None).unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(err.message, "Fitness Tracker Watch is out of stock");
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_rejects_zero_and_blank_id() {
        let catalog = FixtureCatalog::new();
        let mut cart = new_cart();

        let err = add_to_cart(&catalog, &mut cart, "1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&catalog, &mut cart, " ", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_line_keeps_price_after_catalog_changes() {
        let original = FixtureCatalog::new();
        let mut cart = new_cart();
        add_to_cart(&original, &mut cart, "16", None).unwrap();

        // Same catalog, laptop repriced
        let repriced: Vec<Product> = original
            .products()
            .into_iter()
            .map(|mut p| {
                if p.id == "16" {
                    p.price = Money::from_rupees(39990);
                }
                p
            })
            .collect();
        let repriced = FixtureCatalog::with_products(repriced).unwrap();
        assert_eq!(repriced.product("16").unwrap().price.rupees(), 39990);

        let response = get_cart(&cart);
        assert_eq!(response.items[0].unit_price.rupees(), 44990);
        assert_eq!(response.totals.subtotal.rupees(), 44990);

        // A new add merges into the existing line at its original price
        let response = add_to_cart(&repriced, &mut cart, "16", None).unwrap();
        assert_eq!(response.items[0].unit_price.rupees(), 44990);
        assert_eq!(response.totals.subtotal.rupees(), 89980);
    }

    #[test]
    fn test_update_and_remove() {
        let catalog = FixtureCatalog::new();
        let mut cart = new_cart();
        add_to_cart(&catalog, &mut cart, "1", None).unwrap();
        add_to_cart(&catalog, &mut cart, "3", None).unwrap();

        let response = update_cart_item(&mut cart, "1", 4).unwrap();
        assert_eq!(response.totals.item_count, 5);

        let response = update_cart_item(&mut cart, "1", 0).unwrap();
        assert_eq!(response.items.len(), 1);

        // Unknown ids change nothing
        let response = update_cart_item(&mut cart, "404", 2).unwrap();
        assert_eq!(response.items.len(), 1);
        let response = remove_from_cart(&mut cart, "404").unwrap();
        assert_eq!(response.items.len(), 1);

        let response = remove_from_cart(&mut cart, "3").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_clear_cart_persists_empty() {
        let catalog = FixtureCatalog::new();
        let kv = Arc::new(MemoryStore::new());
        let mut cart = CartStore::open(KvCartPersistence::new(Arc::clone(&kv)));
        add_to_cart(&catalog, &mut cart, "5", Some(2)).unwrap();

        let response = clear_cart(&mut cart);

        assert!(response.items.is_empty());
        assert_eq!(response.totals.item_count, 0);
        assert_eq!(response.totals.subtotal, Money::zero());
        // An empty cart is below the free-delivery threshold
        assert_eq!(response.totals.delivery_fee.rupees(), 50);
        assert_eq!(response.totals.total.rupees(), 50);
        let reopened = CartStore::open(KvCartPersistence::new(kv));
        assert_eq!(reopened.item_count(), 0);
    }

    #[test]
    fn test_toggle_cart() {
        let mut cart = new_cart();
        assert!(toggle_cart(&mut cart));
        assert!(get_cart(&cart).is_open);
        assert!(!toggle_cart(&mut cart));
    }
}
