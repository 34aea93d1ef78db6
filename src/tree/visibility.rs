//! Opens every ancestor folder of a node so it shows up in a rendered view.

use crate::tree::locator::{find_mut, path_to};
use crate::tree::node::{Node, Tree};

pub fn ensure_visible(tree: &Tree, id: &str) -> Tree {
    let mut next = tree.clone();
    let path = path_to(tree, id);
    let Some((_, ancestors)) = path.split_last() else {
        return next;
    };
    for ancestor in ancestors {
        if let Some(Node::Folder(folder)) = find_mut(next.roots_mut(), ancestor) {
            folder.is_open = true;
        }
    }
    next
}

/// True when every folder above `id` is open; false for missing ids
pub fn is_visible(tree: &Tree, id: &str) -> bool {
    let path = path_to(tree, id);
    let Some((_, ancestors)) = path.split_last() else {
        return false;
    };
    ancestors.iter().all(|ancestor| {
        crate::tree::locator::find_by_id(tree, ancestor)
            .and_then(|found| found.node.as_folder())
            .map(|folder| folder.is_open)
            .unwrap_or(false)
    })
}
