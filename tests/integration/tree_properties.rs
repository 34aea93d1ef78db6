use super::support::{arb_tree, memory_session};
use canopy::interchange::{export_tree, import_tree};
use canopy::tree::{self, Node, Placement};
use proptest::prelude::*;
use proptest::sample::Index;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_removed_node_is_not_found(t in arb_tree(), pick in any::<Index>()) {
        let ids = t.ids();
        prop_assume!(!ids.is_empty());
        let id = ids[pick.index(ids.len())].to_string();

        let removed = tree::remove(&t, &id);
        prop_assert!(tree::find_by_id(&removed, &id).is_none());
        prop_assert!(tree::find_by_id(&t, &id).is_some());
    }

    #[test]
    fn prop_root_insert_appends_last(t in arb_tree()) {
        let fresh = Node::file("fresh", "fresh.txt", "");
        let placed = tree::insert(&t, None, fresh.clone());

        prop_assert_eq!(placed.placement, Placement::Root);
        prop_assert_eq!(tree::find_by_id(&placed.tree, "fresh").map(|f| f.node), Some(&fresh));
        prop_assert_eq!(placed.tree.roots().last(), Some(&fresh));
        prop_assert_eq!(placed.tree.len(), t.len() + 1);
    }

    #[test]
    fn prop_export_import_preserves_tree(t in arb_tree()) {
        let text = export_tree(&t).unwrap();
        prop_assert_eq!(import_tree(&text).unwrap(), t);
    }

    #[test]
    fn prop_drop_legality(t in arb_tree()) {
        for id in t.ids() {
            prop_assert!(!tree::can_drop(&t, id, Some(id)));
            prop_assert!(tree::can_drop(&t, id, None));

            let path = tree::path_to(&t, id);
            for ancestor in &path[..path.len() - 1] {
                prop_assert!(!tree::can_drop(&t, ancestor, Some(id)));
            }
        }
    }

    #[test]
    fn prop_move_into_folder_opens_and_clamps(
        t in arb_tree(),
        pick in any::<Index>(),
        target in any::<Index>(),
        index in 0usize..8,
    ) {
        let ids = t.ids();
        prop_assume!(!ids.is_empty());
        let folders: Vec<&str> = ids
            .iter()
            .copied()
            .filter(|id| tree::find_by_id(&t, id).map(|f| f.node.is_folder()).unwrap_or(false))
            .collect();
        prop_assume!(!folders.is_empty());
        let id = ids[pick.index(ids.len())];
        let folder = folders[target.index(folders.len())];
        prop_assume!(tree::can_drop(&t, id, Some(folder)));

        let placed = tree::move_node(&t, id, Some(folder), Some(index));
        prop_assert_eq!(placed.placement, Placement::Folder(folder.to_string()));

        let found = tree::find_by_id(&placed.tree, folder).unwrap();
        let folder_node = found.node.as_folder().unwrap();
        prop_assert!(folder_node.is_open);
        let expected = index.min(folder_node.children.len() - 1);
        let position = folder_node.children.iter().position(|c| c.id() == id);
        prop_assert_eq!(position, Some(expected));
        prop_assert_eq!(placed.tree.node_count(), t.node_count());
    }

    #[test]
    fn prop_undo_then_redo_restores_snapshots(t in arb_tree(), pick in any::<Index>()) {
        let ids = t.ids();
        prop_assume!(!ids.is_empty());
        let id = ids[pick.index(ids.len())].to_string();

        let mut session = memory_session(t.clone());
        session.rename_item(&id, "renamed");
        let after = session.tree().clone();
        prop_assert_ne!(&after, &t);

        prop_assert!(session.undo());
        prop_assert_eq!(session.tree(), &t);
        prop_assert!(session.redo());
        prop_assert_eq!(session.tree(), &after);
    }
}
