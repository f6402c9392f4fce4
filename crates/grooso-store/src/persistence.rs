//! # Cart Snapshot Persistence
//!
//! Write-through mirror of the cart into a [`KeyValueStore`].
//!
//! ## Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Snapshot Lifecycle                              │
//! │                                                                         │
//! │  startup ──► load()                                                     │
//! │               ├── key missing         → empty cart                      │
//! │               ├── store read fails    → empty cart (warn)               │
//! │               ├── JSON malformed      → empty cart (warn)               │
//! │               └── JSON array of lines → Cart::from_items (repaired)     │
//! │                                                                         │
//! │  every mutation ──► save(items)                                         │
//! │               └── full array serialized, key overwritten                │
//! │                                                                         │
//! │  logout / clear ──► save([])                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading never fails: a bad snapshot must not stop the storefront from
//! starting. Saving reports errors and leaves it to the caller to log them.

use grooso_core::{Cart, LineItem, CART_STORAGE_KEY};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Load/save seam between the cart store and durable storage.
pub trait CartPersistence {
    /// Reads the stored cart. Never fails; anything unreadable is an empty cart.
    fn load(&self) -> Cart;

    /// Overwrites the stored cart with `items`.
    fn save(&self, items: &[LineItem]) -> StoreResult<()>;

    /// Removes the stored cart entirely.
    fn discard(&self) -> StoreResult<()>;
}

/// [`CartPersistence`] on top of a key-value store, under a single key.
///
/// ## Usage
/// ```rust
/// use grooso_store::{CartPersistence, KvCartPersistence, MemoryStore};
///
/// let persistence = KvCartPersistence::new(MemoryStore::new());
/// assert!(persistence.load().is_empty());
/// ```
#[derive(Debug)]
pub struct KvCartPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvCartPersistence<S> {
    /// Persists under the default `"grooso-cart"` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Persists under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        KvCartPersistence {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> CartPersistence for KvCartPersistence<S> {
    fn load(&self) -> Cart {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored cart, starting empty");
                return Cart::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored cart, starting empty");
                return Cart::new();
            }
        };

        let items: Vec<LineItem> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored cart is malformed, starting empty");
                return Cart::new();
            }
        };

        let stored_lines = items.len();
        let cart = Cart::from_items(items);
        if cart.line_count() != stored_lines {
            warn!(
                key = %self.key,
                stored_lines,
                kept_lines = cart.line_count(),
                "Stored cart had zero-quantity or duplicate lines, repaired"
            );
        }

        debug!(key = %self.key, lines = cart.line_count(), "Restored cart");
        cart
    }

    fn save(&self, items: &[LineItem]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, lines = items.len(), "Saved cart");
        Ok(())
    }

    fn discard(&self) -> StoreResult<()> {
        self.store.delete(&self.key)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryStore;
    use crate::sqlite::{SqliteStore, StoreConfig};
    use grooso_core::{Money, OrderType, Product};
    use std::sync::Arc;

    fn product(id: &str, name: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "Electronics".to_string(),
            price: Money::from_rupees(price),
            original_price: Some(Money::from_rupees(price + 100)),
            image: Some(format!("https://img.example/{id}.jpg")),
            rating: 4.2,
            reviews: 7,
            in_stock: true,
            vendor: "Gadget Store".to_string(),
            description: String::new(),
            features: vec![],
            order_type: OrderType::Nationwide,
        }
    }

    fn three_item_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&product("10", "Smartphone Stand", 799), 1);
        cart.add_item(&product("7", "LED Desk Lamp", 1299), 2);
        cart.add_item(&product("15", "T-shirt", 350), 3);
        cart
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::ConnectionFailed("unavailable".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::QueryFailed("quota exceeded".to_string()))
        }
        fn delete(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::QueryFailed("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let store = Arc::new(MemoryStore::new());
        let persistence = KvCartPersistence::new(Arc::clone(&store));
        let cart = three_item_cart();

        persistence.save(cart.items()).unwrap();

        let reloaded = KvCartPersistence::new(store).load();
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn test_round_trip_through_sqlite() {
        let store = SqliteStore::open(StoreConfig::in_memory()).unwrap();
        let persistence = KvCartPersistence::new(store);
        let cart = three_item_cart();

        persistence.save(cart.items()).unwrap();

        assert_eq!(persistence.load(), cart);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let persistence = KvCartPersistence::new(MemoryStore::new());
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_malformed_snapshot_loads_empty() {
        let store = MemoryStore::new();
        store.set(CART_STORAGE_KEY, "{not json").unwrap();

        let persistence = KvCartPersistence::new(store);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let store = MemoryStore::new();
        store.set(CART_STORAGE_KEY, r#"{"items":[]}"#).unwrap();
        store.set("other", "[]").unwrap();

        let persistence = KvCartPersistence::new(store);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_unreadable_store_loads_empty() {
        let persistence = KvCartPersistence::new(BrokenStore);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_save_reports_write_failure() {
        let persistence = KvCartPersistence::new(BrokenStore);
        let result = persistence.save(three_item_cart().items());
        assert!(matches!(result, Err(StoreError::QueryFailed(_))));
    }

    #[test]
    fn test_load_repairs_duplicates_and_zero_quantities() {
        let store = MemoryStore::new();
        store
            .set(
                CART_STORAGE_KEY,
                r#"[
                    {"productId":"1","name":"Chicken Biryani","unitPrice":299,"quantity":1},
                    {"productId":"2","name":"Margherita Pizza","unitPrice":249,"quantity":0},
                    {"productId":"1","name":"Chicken Biryani","unitPrice":299,"quantity":2}
                ]"#,
            )
            .unwrap();

        let cart = KvCartPersistence::new(store).load();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 3);
    }

    #[test]
    fn test_load_overflowing_line_does_not_panic() {
        let store = MemoryStore::new();
        store
            .set(
                CART_STORAGE_KEY,
                r#"[{"productId":"1","name":"x","unitPrice":9223372036854775807,"quantity":2}]"#,
            )
            .unwrap();

        let cart = KvCartPersistence::new(store).load();
        let totals = cart.totals();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(totals.subtotal, Money::from_rupees(i64::MAX));
        assert_eq!(totals.total, Money::from_rupees(i64::MAX));
    }

    #[test]
    fn test_custom_key_and_discard() {
        let store = Arc::new(MemoryStore::new());
        let persistence = KvCartPersistence::with_key(Arc::clone(&store), "session-42-cart");
        assert_eq!(persistence.key(), "session-42-cart");

        persistence.save(three_item_cart().items()).unwrap();
        assert!(store.get("session-42-cart").unwrap().is_some());
        assert!(store.get(CART_STORAGE_KEY).unwrap().is_none());

        persistence.discard().unwrap();
        assert!(store.get("session-42-cart").unwrap().is_none());
        assert!(persistence.load().is_empty());
    }
}
