//! Local slot storage
//!
//! A small SQLite-backed key/value store. Each persisted piece of state
//! (shown-word ledger, level preference) lives in its own named slot holding
//! a serialized string, opaque to everything but its owning module.

use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

// ============================================================
// Error types
// ============================================================

/// Storage module error type
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("lock acquisition failed: {0}")]
    LockError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

// ============================================================
// SlotStorage
// ============================================================

const SLOT_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS slot (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

/// Named durable slots over a single SQLite connection
pub struct SlotStorage {
    conn: Arc<Mutex<Connection>>,
    db_path: String,
}

impl SlotStorage {
    /// Open (or create) a slot store at the given path.
    ///
    /// Enables WAL mode and creates the slot table if missing.
    pub fn new<P: AsRef<Path>>(db_path: P) -> StorageResult<Self> {
        let path_str = db_path.as_ref().to_string_lossy().to_string();
        let connection = Connection::open(&db_path)?;

        connection.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA foreign_keys=ON;",
        )?;
        connection.execute_batch(SLOT_SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(connection)),
            db_path: path_str,
        })
    }

    /// In-memory store for tests
    pub fn in_memory() -> StorageResult<Self> {
        let connection = Connection::open_in_memory()?;

        connection.execute_batch("PRAGMA foreign_keys=ON;")?;
        connection.execute_batch(SLOT_SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(connection)),
            db_path: ":memory:".to_string(),
        })
    }

    /// Database file path (`:memory:` for test stores)
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Read a slot's value, `None` if the slot has never been written
    pub fn get_slot(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.get_conn()?;

        let value: Option<String> = conn
            .query_row("SELECT value FROM slot WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    /// Write a slot, replacing any previous value
    pub fn set_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            "INSERT OR REPLACE INTO slot (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            [key, value],
        )?;

        Ok(())
    }

    /// Delete a slot; returns whether a row was removed
    pub fn delete_slot(&self, key: &str) -> StorageResult<bool> {
        let conn = self.get_conn()?;

        let affected = conn.execute("DELETE FROM slot WHERE key = ?1", [key])?;

        Ok(affected > 0)
    }

    fn get_conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StorageError::LockError(e.to_string()))
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_storage() {
        let storage = SlotStorage::in_memory().expect("Failed to create in-memory storage");
        assert_eq!(storage.db_path(), ":memory:");
    }

    #[test]
    fn test_slot_roundtrip() {
        let storage = SlotStorage::in_memory().expect("Failed to create in-memory storage");

        storage
            .set_slot("test-key", "test-value")
            .expect("Failed to set slot");
        let value = storage.get_slot("test-key").expect("Failed to get slot");
        assert_eq!(value, Some("test-value".to_string()));
    }

    #[test]
    fn test_slot_overwrite() {
        let storage = SlotStorage::in_memory().expect("Failed to create in-memory storage");

        storage
            .set_slot("test-key", "first")
            .expect("Failed to set slot");
        storage
            .set_slot("test-key", "second")
            .expect("Failed to set slot");

        let value = storage.get_slot("test-key").expect("Failed to get slot");
        assert_eq!(value, Some("second".to_string()));
    }

    #[test]
    fn test_get_missing_slot() {
        let storage = SlotStorage::in_memory().expect("Failed to create in-memory storage");

        let value = storage
            .get_slot("never-written")
            .expect("Failed to get slot");
        assert_eq!(value, None);
    }

    #[test]
    fn test_delete_slot() {
        let storage = SlotStorage::in_memory().expect("Failed to create in-memory storage");

        storage
            .set_slot("test-key", "value")
            .expect("Failed to set slot");

        let deleted = storage.delete_slot("test-key").expect("Failed to delete");
        assert!(deleted);
        assert_eq!(
            storage.get_slot("test-key").expect("Failed to get slot"),
            None
        );

        let deleted_again = storage.delete_slot("test-key").expect("Failed to delete");
        assert!(!deleted_again);
    }

    #[test]
    fn test_file_backed_storage_survives_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("slots.db");

        {
            let storage = SlotStorage::new(&db_path).expect("Failed to create storage");
            storage
                .set_slot("persisted", "across-reopen")
                .expect("Failed to set slot");
        }

        let reopened = SlotStorage::new(&db_path).expect("Failed to reopen storage");
        let value = reopened.get_slot("persisted").expect("Failed to get slot");
        assert_eq!(value, Some("across-reopen".to_string()));
    }
}
