//! StorageConfig and resolve_path for the persisted snapshot store.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the snapshot database; None means `$XDG_DATA_HOME/canopy/store`
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Keep the tree in memory only; nothing is read from or written to disk
    #[serde(default)]
    pub ephemeral: bool,
}

impl StorageConfig {
    /// Resolve the store directory to an actual filesystem location.
    pub fn resolve_path(&self) -> Result<PathBuf, ApiError> {
        match &self.store_path {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => Ok(xdg::data_dir()?.join("store")),
        }
    }
}
