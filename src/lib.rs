//! Canopy: Ordered File/Folder Tree Engine
//!
//! An in-memory hierarchy of files and folders, edited through copy-on-write
//! snapshots. A [`session::TreeSession`] layers selection, context-menu state,
//! a bounded undo/redo timeline and snapshot persistence over the pure
//! operations in [`tree`].

pub mod config;
pub mod error;
pub mod history;
pub mod interchange;
pub mod logging;
pub mod session;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;
