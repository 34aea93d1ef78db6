//! Core types shared across the tree engine.

/// NodeId: opaque identifier of a file or folder, unique across the whole tree
pub type NodeId = String;

/// Number of snapshots the history timeline retains by default
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// Key under which the current tree snapshot is persisted
pub const STORAGE_KEY: &str = "file-tree-data";
