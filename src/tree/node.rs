//! File and folder node types

use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// File node: always a leaf, carries an opaque content blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// Folder node: ordered children plus the UI expansion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "isOpen", default)]
    pub is_open: bool,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Tree node, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    pub fn file(id: impl Into<NodeId>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Node::File(FileNode {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        })
    }

    /// New folders start open and empty
    pub fn folder(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Node::Folder(FolderNode {
            id: id.into(),
            name: name.into(),
            is_open: true,
            children: Vec::new(),
        })
    }

    pub fn folder_with(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        is_open: bool,
        children: Vec<Node>,
    ) -> Self {
        Node::Folder(FolderNode {
            id: id.into(),
            name: name.into(),
            is_open,
            children,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Node::File(file) => &file.id,
            Node::Folder(folder) => &folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Node::File(file) => file.name = name.into(),
            Node::Folder(folder) => folder.name = name.into(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    /// Children of a folder; files report an empty slice
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder(folder) => &folder.children,
            Node::File(_) => &[],
        }
    }

    /// Short label for the variant, matching the wire tag
    pub fn kind(&self) -> &'static str {
        match self {
            Node::File(_) => "file",
            Node::Folder(_) => "folder",
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Ordered sequence of root-level nodes
///
/// Serializes as the bare JSON array, which is the persisted and exported shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<Node> {
        &mut self.roots
    }

    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    /// Number of root-level entries
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// Every id in depth-first pre-order
    pub fn ids(&self) -> Vec<&str> {
        fn collect<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
            for node in nodes {
                out.push(node.id());
                collect(node.children(), out);
            }
        }
        let mut out = Vec::with_capacity(self.node_count());
        collect(&self.roots, &mut out);
        out
    }

    pub fn contains(&self, id: &str) -> bool {
        crate::tree::locator::find_by_id(self, id).is_some()
    }

    /// First id that occurs more than once, if any
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.ids().into_iter().find(|id| !seen.insert(*id))
    }
}

impl From<Vec<Node>> for Tree {
    fn from(roots: Vec<Node>) -> Self {
        Self::new(roots)
    }
}
