//! Ordered file/folder tree
//!
//! Snapshots are plain owned values. Lookups borrow a snapshot; every structural
//! edit clones it and returns the new one, leaving the old one valid for history.

pub mod defaults;
pub mod ids;
pub mod locator;
pub mod mutator;
pub mod node;
pub mod validator;
pub mod visibility;

pub use defaults::default_tree;
pub use ids::{HashedIdSource, IdSource, SequentialIdSource};
pub use locator::{find_by_id, find_with_index, path_to, Found, Located};
pub use mutator::{insert, move_node, remove, rename, toggle_open, Placed, Placement};
pub use node::{FileNode, FolderNode, Node, Tree};
pub use validator::{can_drop, check_drop, DropRejection};
pub use visibility::{ensure_visible, is_visible};
