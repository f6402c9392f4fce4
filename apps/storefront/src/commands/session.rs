//! # Session Commands
//!
//! Signing out forgets the cart: it is emptied and the empty state is
//! persisted, so the next session starts clean.

use tracing::info;

use crate::state::CartStore;

/// Ends the session.
pub fn logout(cart: &mut CartStore) {
    let dropped = cart.item_count();
    cart.clear();
    cart.set_visibility(false);
    info!(dropped_items = dropped, "Logged out, cart cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixtureCatalog;
    use crate::commands::cart::add_to_cart;
    use grooso_store::{KvCartPersistence, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn test_logout_clears_persisted_cart() {
        let catalog = FixtureCatalog::new();
        let kv = Arc::new(MemoryStore::new());
        let mut cart = CartStore::open(KvCartPersistence::new(Arc::clone(&kv)));
        add_to_cart(&catalog, &mut cart, "7", Some(2)).unwrap();
        cart.set_visibility(true);

        logout(&mut cart);

        assert_eq!(cart.item_count(), 0);
        assert!(!cart.is_open());
        let next_session = CartStore::open(KvCartPersistence::new(kv));
        assert_eq!(next_session.item_count(), 0);
    }
}
