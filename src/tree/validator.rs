//! Drop legality for drag-and-drop reparenting
//!
//! Evaluated on the pristine tree before `move_node` runs.

use crate::tree::locator::{find_by_id, path_to};
use crate::tree::node::Tree;
use thiserror::Error;

/// Why a drop was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropRejection {
    #[error("node {0} does not exist")]
    UnknownNode(String),
    #[error("target {0} does not exist")]
    TargetNotFound(String),
    #[error("target {0} is not a folder")]
    TargetNotFolder(String),
    #[error("node {0} cannot be dropped onto itself")]
    SelfDrop(String),
    #[error("folder {dragged} cannot be dropped into its own descendant {target}")]
    IntoDescendant { dragged: String, target: String },
}

/// Check whether `dragged` may be dropped into `target` (root when `None`)
pub fn check_drop(tree: &Tree, dragged: &str, target: Option<&str>) -> Result<(), DropRejection> {
    let dragged_node = find_by_id(tree, dragged)
        .ok_or_else(|| DropRejection::UnknownNode(dragged.to_string()))?
        .node;

    let Some(target) = target else {
        return Ok(());
    };

    let target_node = find_by_id(tree, target)
        .ok_or_else(|| DropRejection::TargetNotFound(target.to_string()))?
        .node;
    if !target_node.is_folder() {
        return Err(DropRejection::TargetNotFolder(target.to_string()));
    }
    if dragged == target {
        return Err(DropRejection::SelfDrop(dragged.to_string()));
    }
    if dragged_node.is_folder() && path_to(tree, target).iter().any(|id| id == dragged) {
        return Err(DropRejection::IntoDescendant {
            dragged: dragged.to_string(),
            target: target.to_string(),
        });
    }
    Ok(())
}

pub fn can_drop(tree: &Tree, dragged: &str, target: Option<&str>) -> bool {
    check_drop(tree, dragged, target).is_ok()
}
