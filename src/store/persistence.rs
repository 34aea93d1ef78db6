//! Sled-backed snapshot persistence
//!
//! The whole tree is stored as JSON under a single well-known key.

use crate::error::StorageError;
use crate::store::SnapshotStore;
use crate::tree::Tree;
use crate::types::STORAGE_KEY;
use std::path::Path;

pub struct SledSnapshotStore {
    db: sled::Db,
}

impl SledSnapshotStore {
    /// Open (or create) a database at `path`
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self::from_db(db))
    }

    pub fn from_db(db: sled::Db) -> Self {
        Self { db }
    }

    /// Raw stored bytes, if any
    pub fn raw(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(STORAGE_KEY)?.map(|value| value.to_vec()))
    }
}

impl SnapshotStore for SledSnapshotStore {
    fn load(&self) -> Result<Option<Tree>, StorageError> {
        match self.db.get(STORAGE_KEY)? {
            Some(bytes) => Ok(Some(crate::interchange::from_json_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, tree: &Tree) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(tree)?;
        self.db.insert(STORAGE_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }
}
