//! Durable preference storage
//!
//! This module provides:
//! - The `PreferenceStore` seam the engine persists through
//! - SQLite-backed storage with migrations and connection pooling
//! - An in-memory store for tests and ephemeral hosts

mod migrations;
mod preferences;
mod queries;

pub use migrations::run_migrations;
pub use preferences::{MemoryStore, PreferenceStore};
pub use queries::*;

use crate::error::{Error, Result, StorageError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};
use tracing::info;

/// Database connection pool type
pub type DbPool = Pool<SqliteConnectionManager>;

/// Database file name inside the data directory
pub const DB_FILE_NAME: &str = "timetheme.db";

/// SQLite storage for preferences
pub struct Storage {
    pool: DbPool,
}

impl Storage {
    /// Create a new storage instance with a directory path
    pub fn new_with_path(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();

        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join(DB_FILE_NAME);
        info!("Database path: {:?}", db_path);

        Self::from_path(db_path)
    }

    /// Create storage from a specific path (useful for testing)
    pub fn from_path(db_path: PathBuf) -> Result<Self> {
        let manager = SqliteConnectionManager::file(&db_path);
        let pool = Pool::builder()
            .max_size(4)
            .build(manager)
            .map_err(|e| Error::Storage(StorageError::Pool(e.to_string())))?;

        let storage = Self { pool };
        storage.initialize()?;

        Ok(storage)
    }

    /// Initialize database with migrations
    fn initialize(&self) -> Result<()> {
        let conn = self.pool.get()?;
        run_migrations(&conn)?;
        info!("Database initialized successfully");
        Ok(())
    }

    fn connection(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| Error::Storage(StorageError::Pool(e.to_string())))
    }

}

impl PreferenceStore for Storage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connection()?;
        get_setting(&conn, key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connection()?;
        set_setting(&conn, key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.connection()?;
        delete_setting(&conn, key)
    }
}
