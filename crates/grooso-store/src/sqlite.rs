//! # SQLite Key-Value Store
//!
//! Durable [`KeyValueStore`] on a single SQLite table, with the synchronous
//! contract the cart needs.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SqliteStore                                        │
//! │                                                                         │
//! │  CartStore ── set("grooso-cart", json) ──► SqliteStore::set            │
//! │                                               │                         │
//! │                                               │ runtime.block_on(..)    │
//! │                                               ▼                         │
//! │                        ┌─────────────────────────────────────┐         │
//! │                        │ current-thread Tokio runtime (owned)│         │
//! │                        │   SqlitePool ── kv_store table      │         │
//! │                        └─────────────────────────────────────┘         │
//! │                                                                         │
//! │  Every call runs to completion before returning; there is no           │
//! │  background flush and no batching.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Calling Context
//! The store blocks on its own runtime, so it must be used from plain
//! (non-async) code. Calling it from inside another Tokio runtime panics.
//!
//! ## WAL Mode
//! File databases use WAL journaling with NORMAL synchronous: a crash may
//! lose the last write but never corrupts the file.

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;
use crate::migrations;

const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// SQLite store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/grooso.db")
///     .max_connections(2)
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one writer, one spare for health checks)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on open.
    /// Default: true
    pub run_migrations: bool,
}

impl StoreConfig {
    /// Creates a configuration for the database at `path`.
    ///
    /// The file is created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 2,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on open.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// The database lives as long as the pool keeps its single connection.
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Whether this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> StoreResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| StoreError::ConnectionFailed(e.to_string()));
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            // Readers don't block the writer
            .journal_mode(SqliteJournalMode::Wal)
            // May lose the last write on power loss, never corrupts
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true))
    }
}

// =============================================================================
// Store
// =============================================================================

/// SQLite-backed key-value store.
///
/// ## Usage
/// ```rust,ignore
/// let store = SqliteStore::open(StoreConfig::new("./grooso.db"))?;
/// store.set("grooso-cart", "[]")?;
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    // Declared before `runtime` so the pool is dropped while the runtime is
    // still alive.
    pool: SqlitePool,
    runtime: Runtime,
}

impl SqliteStore {
    /// Opens (creating if needed) the database and runs migrations.
    ///
    /// ## What This Does
    /// 1. Builds a private current-thread Tokio runtime
    /// 2. Creates the connection pool
    /// 3. Runs migrations (if enabled)
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening key-value store"
        );

        let runtime = Builder::new_current_thread().enable_all().build()?;
        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let pool = runtime
            .block_on(
                SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .min_connections(config.min_connections)
                    .acquire_timeout(config.connect_timeout)
                    .idle_timeout(Some(config.idle_timeout))
                    .connect_with(connect_options),
            )
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "Store pool created");

        let store = SqliteStore { pool, runtime };

        if config.run_migrations {
            store.run_migrations()?;
        }

        Ok(store)
    }

    /// Runs pending migrations.
    pub fn run_migrations(&self) -> StoreResult<()> {
        self.runtime.block_on(migrations::run_migrations(&self.pool))
    }

    /// Returns (total, applied) migration counts.
    pub fn migration_status(&self) -> StoreResult<(usize, usize)> {
        self.runtime.block_on(migrations::migration_status(&self.pool))
    }

    /// Checks if the database can execute queries.
    pub fn health_check(&self) -> bool {
        self.runtime
            .block_on(sqlx::query("SELECT 1").execute(&self.pool))
            .is_ok()
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let keys = self.runtime.block_on(
            sqlx::query_scalar::<_, String>("SELECT key FROM kv_store ORDER BY key")
                .fetch_all(&self.pool),
        )?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        debug!(key = %key, "kv get");
        let value = self.runtime.block_on(
            sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool),
        )?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, bytes = value.len(), "kv set");
        self.runtime.block_on(
            sqlx::query(
                r#"
                INSERT INTO kv_store (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool),
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        debug!(key = %key, "kv delete");
        self.runtime.block_on(
            sqlx::query("DELETE FROM kv_store WHERE key = ?1")
                .bind(key)
                .execute(&self.pool),
        )?;
        Ok(())
    }
}

impl Drop for SqliteStore {
    fn drop(&mut self) {
        debug!("Closing key-value store pool");
        self.runtime.block_on(self.pool.close());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
