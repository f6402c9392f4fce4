//! # grooso-store: Durable Storage for the Grooso Cart
//!
//! A synchronous key-value store (the local-storage equivalent) and the cart
//! snapshot protocol built on it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grooso Data Flow                                 │
//! │                                                                         │
//! │  CartStore mutation (add / remove / update / clear)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   grooso-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐      ┌──────────────────────────────┐ │   │
//! │  │   │ KvCartPersistence  │─────►│ KeyValueStore                │ │   │
//! │  │   │ (persistence.rs)   │      │  ├── MemoryStore (memory.rs) │ │   │
//! │  │   │ load / save JSON   │      │  └── SqliteStore (sqlite.rs) │ │   │
//! │  │   └────────────────────┘      └──────────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: <app data>/grooso.db (kv_store table)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grooso_store::{CartPersistence, KvCartPersistence, SqliteStore, StoreConfig};
//!
//! let store = SqliteStore::open(StoreConfig::new("grooso.db"))?;
//! let persistence = KvCartPersistence::new(store);
//! let cart = persistence.load();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod persistence;
pub mod sqlite;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use persistence::{CartPersistence, KvCartPersistence};
pub use sqlite::{SqliteStore, StoreConfig};
