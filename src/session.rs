//! Tree Session
//!
//! Owns the live tree snapshot, the selection and the undo history, and exposes
//! the operation set the presentation layer calls. Each operation runs to
//! completion, records the new snapshot once and saves it through the injected
//! [`SnapshotStore`]. A failed save is logged and never rolls back memory.

use crate::error::{ApiError, ImportError};
use crate::history::History;
use crate::interchange;
use crate::store::SnapshotStore;
use crate::tree::{self, HashedIdSource, IdSource, Node, Placement, Tree};
use crate::types::{NodeId, DEFAULT_HISTORY_LIMIT};
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_FILE_NAME: &str = "New File";
const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// Session construction options
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub history_limit: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Node the context menu is open for, with its anchor position
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub node_id: NodeId,
    pub x: f64,
    pub y: f64,
}

pub struct TreeSession {
    tree: Tree,
    selection: Option<NodeId>,
    context_menu: Option<ContextMenu>,
    history: History,
    store: Arc<dyn SnapshotStore>,
    ids: Box<dyn IdSource>,
}

impl TreeSession {
    /// Open a session from whatever the store holds, or the default tree
    pub fn open(store: Arc<dyn SnapshotStore>, options: SessionOptions) -> Self {
        let tree = match store.load() {
            Ok(Some(tree)) => {
                let duplicate = tree.duplicate_id().map(str::to_string);
                match duplicate {
                    None => {
                        info!(nodes = tree.node_count(), "Loaded persisted tree");
                        tree
                    }
                    Some(id) => {
                        warn!(node_id = %id, "Persisted tree has duplicate ids, using default tree");
                        tree::default_tree()
                    }
                }
            }
            Ok(None) => {
                info!("No persisted tree, starting from default tree");
                tree::default_tree()
            }
            Err(e) => {
                warn!("Failed to load persisted tree: {}, using default tree", e);
                tree::default_tree()
            }
        };
        Self::with_tree(tree, store, options)
    }

    /// Start a session on an explicit tree, ignoring what the store holds
    pub fn with_tree(tree: Tree, store: Arc<dyn SnapshotStore>, options: SessionOptions) -> Self {
        let history = History::with_limit(&tree, options.history_limit);
        Self {
            tree,
            selection: None,
            context_menu: None,
            history,
            store,
            ids: Box::new(HashedIdSource::new()),
        }
    }

    /// Replace the id generator
    pub fn with_id_source(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn select_node(&mut self, id: Option<&str>) {
        self.selection = id.map(str::to_string);
    }

    pub fn open_context_menu(&mut self, id: &str, x: f64, y: f64) {
        if tree::find_by_id(&self.tree, id).is_some() {
            self.context_menu = Some(ContextMenu {
                node_id: id.to_string(),
                x,
                y,
            });
        }
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    pub fn toggle_folder(&mut self, id: &str) {
        let next = tree::toggle_open(&self.tree, id);
        self.commit(next);
    }

    /// Create a file; returns the new node's id, which becomes the selection
    ///
    /// Without an explicit parent the selected folder is used, else root. A
    /// name without an extension gets `.txt`.
    pub fn create_file(&mut self, parent_id: Option<&str>, name: Option<&str>) -> NodeId {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME);
        let name = if name.contains('.') {
            name.to_string()
        } else {
            format!("{}.txt", name)
        };
        let id = self.fresh_id();
        let content = format!("// {}\n", name);
        self.create(parent_id, Node::file(id.clone(), name, content));
        id
    }

    /// Create an open, empty folder; returns its id, which becomes the selection
    pub fn create_folder(&mut self, parent_id: Option<&str>, name: Option<&str>) -> NodeId {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FOLDER_NAME);
        let id = self.fresh_id();
        self.create(parent_id, Node::folder(id.clone(), name));
        id
    }

    fn create(&mut self, parent_id: Option<&str>, node: Node) {
        let parent = match parent_id {
            Some(id) => Some(id.to_string()),
            None => self.selected_folder(),
        };
        let id = node.id().to_string();
        let placed = tree::insert(&self.tree, parent.as_deref(), node);
        debug!(node_id = %id, placement = ?placed.placement, "Created node");
        let next = tree::ensure_visible(&placed.tree, &id);
        self.commit(next);
        self.selection = Some(id);
    }

    fn selected_folder(&self) -> Option<NodeId> {
        let selected = self.selection.as_deref()?;
        tree::find_by_id(&self.tree, selected)
            .filter(|found| found.node.is_folder())
            .map(|found| found.node.id().to_string())
    }

    fn fresh_id(&mut self) -> NodeId {
        loop {
            let id = self.ids.next_id();
            if !self.tree.contains(&id) {
                return id;
            }
            debug!(node_id = %id, "Generated id already in use, retrying");
        }
    }

    /// Delete a node and its subtree
    ///
    /// Selection and context menu are cleared when their node no longer exists.
    pub fn delete_node(&mut self, id: &str) {
        let next = tree::remove(&self.tree, id);
        self.commit(next);
        if let Some(selected) = &self.selection {
            if !self.tree.contains(selected) {
                self.selection = None;
            }
        }
        if let Some(menu) = &self.context_menu {
            if !self.tree.contains(&menu.node_id) {
                self.context_menu = None;
            }
        }
    }

    /// Rename a node; the name is trimmed and an empty result is ignored
    pub fn rename_item(&mut self, id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            warn!(node_id = id, "Ignoring rename to an empty name");
            return;
        }
        let next = tree::rename(&self.tree, id, name);
        self.commit(next);
    }

    /// Move a node under `target_parent` (root when `None`) at `index`
    pub fn move_item(
        &mut self,
        id: &str,
        target_parent: Option<&str>,
        index: Option<usize>,
    ) -> Placement {
        let placed = tree::move_node(&self.tree, id, target_parent, index);
        debug!(node_id = id, placement = ?placed.placement, "Moved node");
        self.commit(placed.tree);
        placed.placement
    }

    /// Whether dropping `id` into `target` (root when `None`) is legal right now
    pub fn can_drop(&self, id: &str, target: Option<&str>) -> bool {
        tree::can_drop(&self.tree, id, target)
    }

    /// Replace the whole tree from JSON and restart history there
    ///
    /// Returns false and leaves everything untouched when the document is invalid.
    pub fn import_tree_data(&mut self, json: &str) -> bool {
        match interchange::import_tree(json).and_then(|tree| self.replace_tree(tree)) {
            Ok(()) => true,
            Err(e) => {
                warn!("Rejected tree import: {}", e);
                false
            }
        }
    }

    /// Replace the whole tree with an already-parsed one and restart history there
    ///
    /// Refuses trees with duplicate ids, leaving the session untouched.
    pub fn replace_tree(&mut self, tree: Tree) -> Result<(), ImportError> {
        if let Some(id) = tree.duplicate_id() {
            return Err(ImportError::DuplicateId(id.to_string()));
        }
        info!(nodes = tree.node_count(), "Imported tree");
        self.replace(tree);
        Ok(())
    }

    pub fn export_tree_data(&self) -> Result<String, ApiError> {
        interchange::export_tree(&self.tree)
            .map_err(|e| ApiError::StorageError(crate::error::StorageError::Serialization(e)))
    }

    /// Replace the tree with the built-in default and restart history there
    pub fn reset_tree_data(&mut self) {
        info!("Resetting tree to defaults");
        self.replace(tree::default_tree());
    }

    /// Step back one snapshot; false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            debug!("Nothing to undo");
            return false;
        };
        self.tree = snapshot.clone();
        self.after_travel();
        true
    }

    /// Step forward one snapshot; false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            debug!("Nothing to redo");
            return false;
        };
        self.tree = snapshot.clone();
        self.after_travel();
        true
    }

    fn after_travel(&mut self) {
        self.selection = None;
        self.context_menu = None;
        self.persist();
    }

    fn replace(&mut self, tree: Tree) {
        self.tree = tree;
        self.selection = None;
        self.context_menu = None;
        self.history.reset(&self.tree);
        self.persist();
    }

    fn commit(&mut self, next: Tree) {
        self.tree = next;
        self.history.record(&self.tree);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.tree) {
            warn!("Failed to persist tree snapshot: {}", e);
        }
    }
}
