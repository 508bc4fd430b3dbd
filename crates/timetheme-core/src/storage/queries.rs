//! Settings queries

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Get a setting value
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result)
}

/// Set a setting value
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
        params![key, value],
    )?;

    Ok(())
}

/// Remove a setting
pub fn delete_setting(conn: &Connection, key: &str) -> Result<bool> {
    let removed = conn.execute("DELETE FROM settings WHERE key = ?", params![key])?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::run_migrations;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_settings() {
        let conn = setup_db();

        set_setting(&conn, "portfolio-manual-theme", "evening").unwrap();

        let value = get_setting(&conn, "portfolio-manual-theme").unwrap();
        assert_eq!(value, Some("evening".to_string()));

        let none = get_setting(&conn, "nonexistent").unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_set_setting_overwrites() {
        let conn = setup_db();

        set_setting(&conn, "portfolio-manual-mode", "true").unwrap();
        set_setting(&conn, "portfolio-manual-mode", "false").unwrap();

        let value = get_setting(&conn, "portfolio-manual-mode").unwrap();
        assert_eq!(value.as_deref(), Some("false"));

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_delete_setting() {
        let conn = setup_db();

        set_setting(&conn, "portfolio-dark-mode-override", "true").unwrap();
        assert!(delete_setting(&conn, "portfolio-dark-mode-override").unwrap());
        assert!(!delete_setting(&conn, "portfolio-dark-mode-override").unwrap());
        assert!(get_setting(&conn, "portfolio-dark-mode-override").unwrap().is_none());
    }
}
