use super::support::memory_session;
use canopy::session::ContextMenu;
use canopy::tree::{self, Node, Tree};

fn node<'a>(t: &'a Tree, id: &str) -> &'a Node {
    tree::find_by_id(t, id).unwrap().node
}

#[test]
fn test_create_file_inside_collapsed_folder() {
    let start = Tree::new(vec![Node::folder_with("a", "a", false, vec![])]);
    let mut session = memory_session(start);

    let id = session.create_file(Some("a"), Some("x.txt"));

    let folder = node(session.tree(), "a").as_folder().unwrap();
    assert!(folder.is_open);
    assert_eq!(folder.children, vec![Node::file(id.clone(), "x.txt", "// x.txt\n")]);
    assert_eq!(session.selection(), Some(id.as_str()));
}

#[test]
fn test_drop_checks_and_move_to_sibling_folder() {
    let start = Tree::new(vec![
        Node::folder_with("a", "a", true, vec![Node::file("b", "", "")]),
        Node::folder_with("c", "c", true, vec![]),
    ]);
    let mut session = memory_session(start);

    assert!(!session.can_drop("a", Some("b")));
    assert!(session.can_drop("a", Some("c")));

    session.move_item("a", Some("c"), Some(0));
    let t = session.tree();
    assert_eq!(node(t, "c").children()[0].id(), "a");
    assert!(t.roots().iter().all(|n| n.id() != "a"));
}

#[test]
fn test_create_uses_selected_folder_and_default_names() {
    let mut session = memory_session(tree::default_tree());
    session.select_node(Some("public"));

    let file = session.create_file(None, None);
    let found = tree::find_by_id(session.tree(), &file).unwrap();
    assert_eq!(found.parent.map(|p| p.id.as_str()), Some("public"));
    assert_eq!(found.node.name(), "New File.txt");

    session.select_node(Some("readme-md"));
    let folder = session.create_folder(None, None);
    let found = tree::find_by_id(session.tree(), &folder).unwrap();
    assert!(found.parent.is_none());
    assert_eq!(found.node.name(), "New Folder");
}

#[test]
fn test_delete_clears_selection_and_context_menu_inside_subtree() {
    let mut session = memory_session(tree::default_tree());
    session.select_node(Some("src-components-card-rs"));
    session.open_context_menu("src-components", 10.0, 20.0);
    assert_eq!(
        session.context_menu(),
        Some(&ContextMenu {
            node_id: "src-components".to_string(),
            x: 10.0,
            y: 20.0
        })
    );

    session.delete_node("src");

    assert_eq!(session.selection(), None);
    assert_eq!(session.context_menu(), None);
    assert!(!session.tree().contains("src-components-card-rs"));
}

#[test]
fn test_context_menu_cleared_by_undo() {
    let mut session = memory_session(tree::default_tree());
    session.rename_item("readme-md", "READ.md");
    session.open_context_menu("readme-md", 1.0, 1.0);
    assert!(session.undo());
    assert!(session.context_menu().is_none());
    assert_eq!(node(session.tree(), "readme-md").name(), "README.md");
}

#[test]
fn test_rejected_import_leaves_session_untouched() {
    let mut session = memory_session(tree::default_tree());
    session.delete_node("public");
    let before = session.tree().clone();

    assert!(!session.import_tree_data("{\"id\":\"x\"}"));
    assert!(!session.import_tree_data("[{\"type\":\"file\"}]"));
    assert_eq!(session.tree(), &before);
    assert!(session.can_undo());

    assert!(session.import_tree_data("[{\"id\":\"x\",\"type\":\"folder\"}]"));
    assert!(!session.can_undo());
    let imported = node(session.tree(), "x").as_folder().unwrap();
    assert!(!imported.is_open);
    assert!(imported.children.is_empty());
}

#[test]
fn test_move_into_own_descendant_lands_at_root() {
    let start = Tree::new(vec![Node::folder_with(
        "outer",
        "outer",
        true,
        vec![Node::folder("inner", "inner")],
    )]);
    let mut session = memory_session(start);

    let placement = session.move_item("outer", Some("inner"), None);
    assert!(placement.is_fallback());
    assert_eq!(session.tree().roots().last().map(|n| n.id()), Some("outer"));
}
