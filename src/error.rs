//! Error types
//!
//! Engine operations never fail on missing ids or bad targets; those degrade to
//! values. These errors cover the boundaries: storage, configuration, import and
//! the command-line host.

use thiserror::Error;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons an imported document is refused
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Malformed JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("Imported data must be a JSON array of nodes")]
    NotAnArray,

    #[error("Top-level entry {index} has no string id")]
    MissingId { index: usize },

    #[error("Invalid node shape: {0}")]
    InvalidShape(serde_json::Error),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}

/// Boundary-level error returned by configuration, storage and CLI paths
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Move rejected: {0}")]
    Rejected(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
