use super::support::memory_session;
use canopy::history::History;
use canopy::tree::{self, Tree};

#[test]
fn test_forty_mutations_keep_thirty_entries() {
    let mut session = memory_session(Tree::empty());
    let mut snapshots = Vec::new();
    for i in 0..40 {
        session.select_node(None);
        session.create_folder(None, Some(&format!("folder {}", i)));
        snapshots.push(session.tree().clone());
    }

    assert_eq!(session.history().len(), 30);
    for _ in 0..29 {
        assert!(session.undo());
    }
    assert!(!session.undo());
    assert_eq!(session.tree(), &snapshots[10]);
    assert_eq!(session.tree().len(), 11);
}

#[test]
fn test_redo_branch_is_discarded_by_new_mutation() {
    let mut session = memory_session(tree::default_tree());
    session.delete_node("public");
    session.delete_node("src");
    assert!(session.undo());
    assert!(session.can_redo());

    session.create_file(None, Some("notes"));
    assert!(!session.can_redo());
    assert!(session.tree().contains("src"));
    assert!(!session.tree().contains("public"));
}

#[test]
fn test_configured_limit_bounds_timeline() {
    let mut history = History::with_limit(&Tree::empty(), 3);
    let mut current = Tree::empty();
    for i in 0..5 {
        current = tree::insert(&current, None, tree::Node::folder(format!("f{}", i), "f")).tree;
        history.record(&current);
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.undo().map(|t| t.len()), Some(4));
    assert_eq!(history.undo().map(|t| t.len()), Some(3));
    assert!(history.undo().is_none());
}
