//! SQLite-backed preference storage.
//!
//! A single `kv` table of text keys and text values. Integers are stored as
//! their decimal representation.

use std::path::Path;

use rusqlite::{params, Connection};

use super::data_dir;
use super::preferences::PreferenceStore;
use crate::error::StorageError;

/// SQLite database holding application preferences.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data dir>/gentlestep.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(data_dir()?.join("gentlestep.db"))
    }

    /// Open (or create) a database file at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        tracing::debug!(path = %path.display(), "opened preference database");
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl PreferenceStore for Database {
    /// Unparsable values read as 0, the way platform preference stores
    /// coerce non-integer entries.
    fn get_int(&self, key: &str) -> Result<Option<i64>, StorageError> {
        let Some(raw) = self.kv_get(key)? else {
            return Ok(None);
        };
        match raw.trim().parse::<i64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                tracing::warn!(key, value = %raw, "stored preference is not an integer, reading as 0");
                Ok(Some(0))
            }
        }
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StorageError> {
        self.kv_set(key, &value.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn int_preferences() {
        let mut db = Database::open_memory().unwrap();
        assert_eq!(db.get_int("n").unwrap(), None);
        db.set_int("n", 41).unwrap();
        assert_eq!(db.get_int("n").unwrap(), Some(41));
        assert_eq!(db.kv_get("n").unwrap().as_deref(), Some("41"));
    }

    #[test]
    fn garbage_reads_as_zero() {
        let db = Database::open_memory().unwrap();
        db.kv_set("n", "many").unwrap();
        assert_eq!(db.get_int("n").unwrap(), Some(0));
    }

    #[test]
    fn file_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");
        {
            let mut db = Database::open_at(&path).unwrap();
            db.set_int("n", 5).unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.get_int("n").unwrap(), Some(5));
    }
}
