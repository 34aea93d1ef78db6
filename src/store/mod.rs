//! Snapshot Store
//!
//! Persistence port for the current tree. The session saves after every change
//! and loads once at startup; it never depends on a particular backend.

pub mod persistence;

use crate::error::StorageError;
use crate::tree::Tree;
use parking_lot::Mutex;

pub use persistence::SledSnapshotStore;

/// Save/load interface for the single persisted tree snapshot
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot; `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Tree>, StorageError>;
    fn save(&self, tree: &Tree) -> Result<(), StorageError>;
}

/// Volatile store for tests and `--ephemeral` sessions
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing snapshot
    pub fn with_tree(tree: &Tree) -> Result<Self, StorageError> {
        let store = Self::new();
        store.save(tree)?;
        Ok(store)
    }

    /// Seed the store with raw bytes, valid or not
    pub fn with_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Mutex::new(Some(bytes.into())),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Tree>, StorageError> {
        match self.slot.lock().as_deref() {
            Some(bytes) => Ok(Some(crate::interchange::from_json_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, tree: &Tree) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(tree)?;
        *self.slot.lock() = Some(bytes);
        Ok(())
    }
}
