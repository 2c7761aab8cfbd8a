//! Native persistent store: a SQLite key-value table in the platform data
//! directory. Storage faults are logged and swallowed so a missing data
//! directory never takes the app down.

use std::path::PathBuf;

use rusqlite::Connection;

use super::KeyValueStore;

pub struct SqliteStore;

impl SqliteStore {
    fn connection() -> Result<Connection, rusqlite::Error> {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minitunes");
        let _ = std::fs::create_dir_all(&dir);

        let conn = Connection::open(dir.join("minitunes.db"))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(conn)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        let conn = Self::connection().ok()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .ok()
    }

    fn set(&self, key: &str, value: &str) {
        let result = Self::connection().and_then(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                [key, value],
            )
        });
        if let Err(err) = result {
            tracing::warn!("failed to write {key}: {err}");
        }
    }

    fn remove(&self, key: &str) {
        let result =
            Self::connection().and_then(|conn| conn.execute("DELETE FROM kv WHERE key = ?1", [key]));
        if let Err(err) = result {
            tracing::warn!("failed to remove {key}: {err}");
        }
    }
}
