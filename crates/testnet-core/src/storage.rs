//! Local key-value storage for the session snapshot.
//!
//! The session only needs `get` / `set` / `remove` over string keys, so the
//! persistence port is a tiny trait:
//! - [`MemoryStore`]: in-process map that records every write (tests, CLI dry runs)
//! - [`RedbStore`]: durable redb file under the data directory

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, TableDefinition};

use crate::error::PortalError;

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// Durable client-local key-value storage.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PortalError>;
    fn remove(&self, key: &str) -> Result<(), PortalError>;
}

/// A single write observed by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Set { key: String, value: String },
    Remove { key: String },
}

/// In-memory store that keeps a log of every mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    ops: Mutex<Vec<StoreOp>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without recording it as a write.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.lock().insert(key.to_string(), value.to_string());
        self
    }

    /// All writes so far, oldest first.
    pub fn operations(&self) -> Vec<StoreOp> {
        self.ops.lock().clone()
    }

    /// Values written with `set` for `key`, oldest first.
    pub fn writes_for(&self, key: &str) -> Vec<String> {
        self.ops
            .lock()
            .iter()
            .filter_map(|op| match op {
                StoreOp::Set { key: k, value } if k == key => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        self.ops.lock().push(StoreOp::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortalError> {
        self.entries.lock().remove(key);
        self.ops.lock().push(StoreOp::Remove { key: key.to_string() });
        Ok(())
    }
}

/// Key-value store backed by a redb database file.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the store at `path`.
    ///
    /// Creates the parent directory and the table if they don't exist yet.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened local storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortalError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_logs_writes() {
        let store = MemoryStore::new().with_entry("seed", "1");
        assert_eq!(store.get("seed").unwrap().as_deref(), Some("1"));
        assert!(store.operations().is_empty());

        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        store.remove("k").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.writes_for("k"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.operations().len(), 3);
        assert_eq!(
            store.operations()[2],
            StoreOp::Remove { key: "k".to_string() }
        );
    }

    #[test]
    fn redb_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = RedbStore::new(dir.path().join("portal.redb")).unwrap();

        assert_eq!(store.get("walletState").unwrap(), None);
        store.set("walletState", "{}").unwrap();
        assert_eq!(store.get("walletState").unwrap().as_deref(), Some("{}"));

        store.remove("walletState").unwrap();
        assert_eq!(store.get("walletState").unwrap(), None);

        // Removing a missing key is not an error
        store.remove("walletState").unwrap();
    }

    #[test]
    fn redb_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("portal.redb");

        {
            let store = RedbStore::new(&path).unwrap();
            store.set("walletState", "persisted").unwrap();
        }

        let reopened = RedbStore::new(&path).unwrap();
        assert_eq!(reopened.get("walletState").unwrap().as_deref(), Some("persisted"));
    }
}
