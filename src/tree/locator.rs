//! Read-only traversal over a tree snapshot
//!
//! Depth-first, pre-order, array order; the first match wins.

use crate::tree::node::{FolderNode, Node, Tree};
use crate::types::NodeId;

/// A node and the folder that contains it (`None` for roots)
#[derive(Debug, Clone, Copy)]
pub struct Found<'a> {
    pub node: &'a Node,
    pub parent: Option<&'a FolderNode>,
}

/// As [`Found`], plus the node's position among its siblings
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub node: &'a Node,
    pub parent: Option<&'a FolderNode>,
    pub index: usize,
}

pub fn find_by_id<'a>(tree: &'a Tree, id: &str) -> Option<Found<'a>> {
    find_with_index(tree, id).map(|located| Found {
        node: located.node,
        parent: located.parent,
    })
}

pub fn find_with_index<'a>(tree: &'a Tree, id: &str) -> Option<Located<'a>> {
    locate(tree.roots(), id, None)
}

fn locate<'a>(
    nodes: &'a [Node],
    id: &str,
    parent: Option<&'a FolderNode>,
) -> Option<Located<'a>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id() == id {
            return Some(Located {
                node,
                parent,
                index,
            });
        }
        if let Node::Folder(folder) = node {
            if let Some(found) = locate(&folder.children, id, Some(folder)) {
                return Some(found);
            }
        }
    }
    None
}

/// Ids from the root ancestor down to the node itself; empty when absent
pub fn path_to(tree: &Tree, id: &str) -> Vec<NodeId> {
    let mut path = Vec::new();
    if walk_path(tree.roots(), id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn walk_path(nodes: &[Node], id: &str, path: &mut Vec<NodeId>) -> bool {
    for node in nodes {
        path.push(node.id().to_string());
        if node.id() == id || walk_path(node.children(), id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Mutable lookup used by the copy-on-write mutators on their private copy
pub(crate) fn find_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let Node::Folder(folder) = node {
            if let Some(found) = find_mut(&mut folder.children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Detach the first node with `id` from wherever it sits
pub(crate) fn detach(nodes: &mut Vec<Node>, id: &str) -> Option<Node> {
    if let Some(index) = nodes.iter().position(|node| node.id() == id) {
        return Some(nodes.remove(index));
    }
    nodes.iter_mut().find_map(|node| match node {
        Node::Folder(folder) => detach(&mut folder.children, id),
        Node::File(_) => None,
    })
}
