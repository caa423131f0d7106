//! Persistent key-value storage using redb.
//!
//! The site persists exactly one thing, the theme preference, but the table
//! is a plain string-to-string map so the store does not need to know that.

use crate::error::VitrineError;
use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use std::path::Path;
use std::sync::Arc;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, VitrineError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "preference storage opened");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Load a preference value. Returns `None` if the key was never set.
    pub fn get_preference(&self, key: &str) -> Result<Option<String>, VitrineError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    /// Save a preference value, overwriting any previous one.
    pub fn set_preference(&self, key: &str, value: &str) -> Result<(), VitrineError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
