use canopy::session::{SessionOptions, TreeSession};
use canopy::store::{MemorySnapshotStore, SledSnapshotStore, SnapshotStore};
use canopy::tree::{self, SequentialIdSource, Tree};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_sled_store_survives_new_session() {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn SnapshotStore> =
        Arc::new(SledSnapshotStore::new(&temp_dir.path().join("store")).unwrap());

    let mut first = TreeSession::open(store.clone(), SessionOptions::default());
    assert_eq!(first.tree(), &tree::default_tree());
    first.delete_node("public");
    first.rename_item("readme-md", "INTRO.md");
    let expected = first.tree().clone();
    drop(first);

    let second = TreeSession::open(store, SessionOptions::default());
    assert_eq!(second.tree(), &expected);
    assert!(!second.can_undo());
}

#[test]
fn test_deep_tree_survives_sled_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db = sled::open(temp_dir.path().join("store")).unwrap();
    let store: Arc<dyn SnapshotStore> = Arc::new(SledSnapshotStore::from_db(db.clone()));

    let mut session = TreeSession::open(store.clone(), SessionOptions::default())
        .with_id_source(Box::new(SequentialIdSource::new("deep")));
    session.select_node(None);
    for _ in 0..100 {
        session.create_folder(None, Some("level"));
    }
    let expected = session.tree().clone();
    assert_eq!(tree::path_to(&expected, "deep100").len(), 100);
    drop(session);

    let reopened = TreeSession::open(
        Arc::new(SledSnapshotStore::from_db(db)),
        SessionOptions::default(),
    );
    assert_eq!(reopened.tree(), &expected);
    assert_eq!(reopened.tree().node_count(), tree::default_tree().node_count() + 100);
}

#[test]
fn test_undo_is_persisted() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut session = TreeSession::open(store.clone(), SessionOptions::default());
    session.delete_node("src");
    assert!(session.undo());

    assert_eq!(store.load().unwrap(), Some(tree::default_tree()));
}

#[test]
fn test_invalid_snapshot_falls_back_to_default() {
    let store = Arc::new(MemorySnapshotStore::with_raw("{\"not\": \"a tree\"}"));
    let session = TreeSession::open(store, SessionOptions::default());
    assert_eq!(session.tree(), &tree::default_tree());
}

#[test]
fn test_empty_persisted_tree_is_kept() {
    let store = Arc::new(MemorySnapshotStore::with_tree(&Tree::empty()).unwrap());
    let session = TreeSession::open(store, SessionOptions::default());
    assert!(session.tree().is_empty());
}
