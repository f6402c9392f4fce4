//! # Grooso Storefront Library
//!
//! The storefront shell: state, commands and startup wiring. The `grooso`
//! binary (main.rs) parses the command line and calls into this library.
//!
//! ## Module Organization
//! ```text
//! grooso_storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup wiring)
//! ├── state/
//! │   ├── cart.rs     ◄─── CartStore (session cart + persistence)
//! │   └── config.rs   ◄─── ConfigState (currency, keys, paths)
//! ├── catalog.rs      ◄─── CatalogProvider, FixtureCatalog
//! ├── commands/       ◄─── catalog, cart, checkout, session
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Startup                                │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, to stderr                     │
//! │     • Default: info,grooso=debug,sqlx=warn (override with RUST_LOG)     │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • ConfigState::from_env (GROOSO_* overrides)                        │
//! │                                                                         │
//! │  3. Determine Database Path ──────────────────────────────────────────► │
//! │     • GROOSO_DB_PATH, else the platform data directory                  │
//! │                                                                         │
//! │  4. Open Store + Hydrate Cart ────────────────────────────────────────► │
//! │     • SqliteStore (WAL, migrations) or MemoryStore (--ephemeral)        │
//! │     • CartStore::open reads the snapshot once                           │
//! │                                                                         │
//! │  5. Run One Command ──────────────────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use grooso_store::{KvCartPersistence, MemoryStore, SqliteStore, StoreConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{ApiError, ErrorCode};
use state::{CartStore, ConfigState};

const DATABASE_FILE: &str = "grooso.db";

/// Where the cart snapshot lives for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// SQLite file in the app data directory
    Durable,
    /// In-process only, gone when the process exits
    Ephemeral,
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grooso=trace` - Show trace for grooso crates only
/// - Default: info, debug for grooso crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grooso=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Opens the cart store for this session.
///
/// ## What This Does
/// 1. Opens the key-value store (SQLite or in-memory)
/// 2. Binds cart persistence to the configured key
/// 3. Hydrates the cart from the stored snapshot
pub fn open_cart_store(config: &ConfigState, mode: StorageMode) -> Result<CartStore, ApiError> {
    let key = config.cart_storage_key.clone();

    let cart = match mode {
        StorageMode::Durable => {
            let db_path = get_database_path(config)?;
            info!(?db_path, "Database path determined");

            let store = SqliteStore::open(StoreConfig::new(db_path))?;
            CartStore::open(KvCartPersistence::with_key(store, key))
        }
        StorageMode::Ephemeral => {
            info!("Using in-memory cart storage");
            CartStore::open(KvCartPersistence::with_key(MemoryStore::new(), key))
        }
    };

    info!(items = cart.item_count(), "Cart store ready");
    Ok(cart)
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.grooso.storefront/grooso.db`
/// - **Windows**: `%APPDATA%\grooso\storefront\data\grooso.db`
/// - **Linux**: `~/.local/share/storefront/grooso.db`
///
/// ## Development Override
/// Set `GROOSO_DB_PATH` to use a custom path.
pub fn get_database_path(config: &ConfigState) -> Result<PathBuf, ApiError> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "grooso", "storefront").ok_or_else(|| {
        ApiError::new(
            ErrorCode::StorageError,
            "Could not determine app data directory",
        )
    })?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir).map_err(|e| {
        ApiError::new(
            ErrorCode::StorageError,
            format!("Could not create {}: {}", data_dir.display(), e),
        )
    })?;

    Ok(data_dir.join(DATABASE_FILE))
}
