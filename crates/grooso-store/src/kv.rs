//! # Key-Value Store Contract
//!
//! The durable store the cart mirrors into: synchronous get/set/delete of
//! string values by string key, modelled on browser local storage.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  KeyValueStore                                                          │
//! │  ├── get(key)         → Option<String>                                  │
//! │  ├── set(key, value)  → overwrite                                       │
//! │  └── delete(key)      → no-op if absent                                 │
//! │                                                                         │
//! │  Implementations                                                        │
//! │  ├── MemoryStore  (tests, ephemeral sessions)                           │
//! │  └── SqliteStore  (durable, survives restarts)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Methods take `&self`; implementations use interior mutability so a store
//! can be shared behind an `Arc` between the cart and other session state.

use std::sync::Arc;

use crate::error::StoreResult;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}
