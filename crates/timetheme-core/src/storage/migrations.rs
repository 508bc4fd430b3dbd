//! Database migrations

use crate::error::{Error, Result, StorageError};
use rusqlite::Connection;
use tracing::{debug, info};

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    info!("Running database migrations");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;

    // Run migrations in order
    let migrations: Vec<(&str, &str)> = vec![
        ("001_settings", MIGRATION_001_SETTINGS),
        ("002_settings_updated_index", MIGRATION_002_SETTINGS_UPDATED_INDEX),
    ];

    for (name, sql) in migrations {
        if !migration_applied(conn, name)? {
            debug!("Applying migration: {}", name);
            conn.execute_batch(sql).map_err(|e| {
                Error::Storage(StorageError::MigrationFailed(format!("{}: {}", name, e)))
            })?;
            mark_migration_applied(conn, name)?;
            info!("Applied migration: {}", name);
        }
    }

    info!("All migrations completed");
    Ok(())
}

fn migration_applied(conn: &Connection, name: &str) -> Result<bool> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM migrations WHERE name = ?",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn mark_migration_applied(conn: &Connection, name: &str) -> Result<()> {
    conn.execute("INSERT INTO migrations (name) VALUES (?)", [name])?;
    Ok(())
}

const MIGRATION_001_SETTINGS: &str = r#"
-- Durable key-value preferences
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

const MIGRATION_002_SETTINGS_UPDATED_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_settings_updated ON settings(updated_at DESC);
"#;
