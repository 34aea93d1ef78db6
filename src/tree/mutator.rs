//! Copy-on-write structural edits
//!
//! Every operation takes a snapshot by reference and returns a new one. The
//! input is never touched, so history can keep holding it.

use crate::tree::locator::{detach, find_mut};
use crate::tree::node::{Node, Tree};
use crate::types::NodeId;
use tracing::{debug, warn};

/// Where an inserted or moved node ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Placed in the root sequence as requested
    Root,
    /// Placed inside the named folder, which is now open
    Folder(NodeId),
    /// The requested parent was missing or not a folder; placed at root instead
    RootFallback { requested: NodeId },
    /// The node to move did not exist; the tree is unchanged
    Missing,
}

impl Placement {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Placement::RootFallback { .. })
    }
}

/// A new snapshot together with the placement outcome
#[derive(Debug, Clone)]
pub struct Placed {
    pub tree: Tree,
    pub placement: Placement,
}

/// Append `node` under `parent_id`, or at root when `parent_id` is `None`
///
/// A missing or non-folder parent falls back to root placement.
pub fn insert(tree: &Tree, parent_id: Option<&str>, node: Node) -> Placed {
    let mut next = tree.clone();
    let placement = place(next.roots_mut(), parent_id, None, node);
    Placed {
        tree: next,
        placement,
    }
}

/// Detach the node and its subtree; unchanged when absent
pub fn remove(tree: &Tree, id: &str) -> Tree {
    let mut next = tree.clone();
    if detach(next.roots_mut(), id).is_none() {
        debug!(node_id = id, "remove: node not found");
    }
    next
}

pub fn rename(tree: &Tree, id: &str, new_name: &str) -> Tree {
    let mut next = tree.clone();
    if let Some(node) = find_mut(next.roots_mut(), id) {
        node.set_name(new_name);
    }
    next
}

/// Flip `isOpen` on a folder; files and missing ids are left alone
pub fn toggle_open(tree: &Tree, id: &str) -> Tree {
    let mut next = tree.clone();
    if let Some(Node::Folder(folder)) = find_mut(next.roots_mut(), id) {
        folder.is_open = !folder.is_open;
    }
    next
}

/// Reparent `id` under `target_parent` (root when `None`) at `index`
///
/// `index` is clamped: `None` or anything past the end appends. The target is
/// resolved after the node has been detached, so a target inside the moved
/// subtree is no longer found and the node lands at root.
pub fn move_node(
    tree: &Tree,
    id: &str,
    target_parent: Option<&str>,
    index: Option<usize>,
) -> Placed {
    let mut next = tree.clone();
    let Some(node) = detach(next.roots_mut(), id) else {
        debug!(node_id = id, "move: node not found");
        return Placed {
            tree: next,
            placement: Placement::Missing,
        };
    };
    let placement = place(next.roots_mut(), target_parent, index, node);
    Placed {
        tree: next,
        placement,
    }
}

fn place(
    roots: &mut Vec<Node>,
    parent_id: Option<&str>,
    index: Option<usize>,
    node: Node,
) -> Placement {
    let Some(parent_id) = parent_id else {
        splice(roots, index, node);
        return Placement::Root;
    };

    match find_mut(roots, parent_id) {
        Some(Node::Folder(folder)) => {
            splice(&mut folder.children, index, node);
            folder.is_open = true;
            return Placement::Folder(parent_id.to_string());
        }
        Some(Node::File(_)) => {
            warn!(
                parent_id,
                node_id = node.id(),
                "Parent is not a folder, placing node at root instead"
            );
        }
        None => {
            warn!(
                parent_id,
                node_id = node.id(),
                "Parent not found, placing node at root instead"
            );
        }
    }
    roots.push(node);
    Placement::RootFallback {
        requested: parent_id.to_string(),
    }
}

fn splice(nodes: &mut Vec<Node>, index: Option<usize>, node: Node) {
    match index {
        Some(i) if i <= nodes.len() => nodes.insert(i, node),
        _ => nodes.push(node),
    }
}
