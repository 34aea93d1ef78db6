use canopy::session::{SessionOptions, TreeSession};
use canopy::store::{MemorySnapshotStore, SnapshotStore};
use canopy::tree::{Node, SequentialIdSource, Tree};
use proptest::prelude::*;
use std::sync::Arc;

/// Session over an in-memory store with predictable fresh ids (`n1`, `n2`, ...)
pub fn memory_session(tree: Tree) -> TreeSession {
    let store: Arc<dyn SnapshotStore> = Arc::new(MemorySnapshotStore::new());
    TreeSession::with_tree(tree, store, SessionOptions::default())
        .with_id_source(Box::new(SequentialIdSource::new("n")))
}

#[derive(Debug, Clone)]
enum Shape {
    File(String),
    Folder(String, bool, Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = "[a-z]{1,6}".prop_map(Shape::File);
    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-z]{1,6}", any::<bool>(), prop::collection::vec(inner, 0..4))
            .prop_map(|(name, open, children)| Shape::Folder(name, open, children))
    })
}

fn build(shape: &Shape, next: &mut usize) -> Node {
    *next += 1;
    let id = format!("t{}", next);
    match shape {
        Shape::File(name) => Node::file(id, name.clone(), format!("// {}\n", name)),
        Shape::Folder(name, open, children) => {
            let children = children.iter().map(|c| build(c, next)).collect();
            Node::folder_with(id, name.clone(), *open, children)
        }
    }
}

/// Arbitrary trees whose ids are unique (`t1`, `t2`, ... in pre-order)
pub fn arb_tree() -> impl Strategy<Value = Tree> {
    prop::collection::vec(shape(), 0..5).prop_map(|shapes| {
        let mut next = 0;
        Tree::new(shapes.iter().map(|s| build(s, &mut next)).collect())
    })
}
