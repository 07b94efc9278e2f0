//! Property tests for the selection engine.

use proptest::prelude::*;

use skilltree::{EngineOptions, Item, ItemTree, SelectionEngine, Toggled};

/// Branching factors per level: roots, then children, then sub-children
fn shape() -> impl Strategy<Value = Vec<Vec<usize>>> {
    proptest::collection::vec(proptest::collection::vec(0usize..4, 0..4), 1..4)
}

fn build_tree(shape: &[Vec<usize>]) -> ItemTree {
    let mut next = 0usize;
    let mut item = |prefix: &str| {
        next += 1;
        let id = format!("{prefix}{next}");
        let label = id.to_uppercase();
        Item::new(id, label)
    };

    let mut roots = Vec::new();
    for child_sizes in shape {
        let root = item("r");
        let mut children = Vec::new();
        for &subs in child_sizes {
            let child = item("c");
            let sub_children = (0..subs).map(|_| item("s")).collect();
            children.push(child.with_sub_children(sub_children));
        }
        roots.push(root.with_children(children));
    }

    ItemTree::new(roots).unwrap()
}

fn all_ids(tree: &ItemTree) -> Vec<String> {
    tree.iter().map(|item| item.id.clone()).collect()
}

fn pick(ids: &[String], n: usize) -> &str {
    &ids[n % ids.len()]
}

fn assert_parents_match_children(engine: &SelectionEngine) -> Result<(), TestCaseError> {
    for item in engine.tree().iter().filter(|item| !item.is_leaf()) {
        let all_children = item
            .nested()
            .iter()
            .all(|child| engine.is_selected(&child.id));
        prop_assert_eq!(
            engine.is_selected(&item.id),
            all_children,
            "branch {} disagrees with its children",
            item.id
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any sequence of toggles, a branch is selected exactly
    /// when all of its direct children are.
    #[test]
    fn property_toggles_keep_parents_consistent(
        shape in shape(),
        toggles in proptest::collection::vec(any::<usize>(), 0..24),
    ) {
        let tree = build_tree(&shape);
        let ids = all_ids(&tree);
        let mut engine = SelectionEngine::new(tree, Vec::<String>::new(), EngineOptions::default());

        for n in toggles {
            engine.toggle_selection(pick(&ids, n));
            assert_parents_match_children(&engine)?;
        }
    }

    /// PROPERTY: a toggle leaves the whole subtree in the toggled state.
    #[test]
    fn property_toggle_cascades_to_subtree(
        shape in shape(),
        toggles in proptest::collection::vec(any::<usize>(), 1..16),
    ) {
        let tree = build_tree(&shape);
        let ids = all_ids(&tree);
        let mut engine = SelectionEngine::new(tree, Vec::<String>::new(), EngineOptions::default());

        for n in toggles {
            let id = pick(&ids, n);
            let outcome = engine.toggle_selection(id);
            let expect_selected = outcome == Some(Toggled::Selected);

            prop_assert_eq!(engine.is_selected(id), expect_selected);
            for descendant in engine.tree().descendant_ids(id) {
                prop_assert_eq!(engine.is_selected(&descendant), expect_selected);
            }
        }
    }

    /// PROPERTY: remove drops exactly one id and keeps the order of the rest.
    #[test]
    fn property_remove_is_exact(
        shape in shape(),
        toggles in proptest::collection::vec(any::<usize>(), 0..12),
        target in any::<usize>(),
    ) {
        let tree = build_tree(&shape);
        let ids = all_ids(&tree);
        let mut engine = SelectionEngine::new(tree, Vec::<String>::new(), EngineOptions::default());
        for n in toggles {
            engine.toggle_selection(pick(&ids, n));
        }

        let before = engine.selected_ids();
        let id = pick(&ids, target).to_string();
        let removed = engine.remove_selection(&id);

        prop_assert_eq!(removed, before.contains(&id));
        let expected: Vec<String> = before.into_iter().filter(|s| *s != id).collect();
        prop_assert_eq!(engine.selected_ids(), expected);
    }

    /// PROPERTY: badges are exactly the selected leaves, in selection order.
    #[test]
    fn property_badges_are_selected_leaves(
        shape in shape(),
        toggles in proptest::collection::vec(any::<usize>(), 0..16),
    ) {
        let tree = build_tree(&shape);
        let ids = all_ids(&tree);
        let mut engine = SelectionEngine::new(tree, Vec::<String>::new(), EngineOptions::default());
        for n in toggles {
            engine.toggle_selection(pick(&ids, n));
        }

        let badge_ids: Vec<String> = engine.badges().into_iter().map(|b| b.id).collect();
        let expected: Vec<String> = engine
            .selected_ids()
            .into_iter()
            .filter(|id| engine.tree().is_leaf(id))
            .collect();
        prop_assert_eq!(badge_ids, expected);
    }

    /// PROPERTY: a breadcrumb has one segment per level and ends at the item.
    #[test]
    fn property_display_path_follows_depth(shape in shape(), n in any::<usize>()) {
        let tree = build_tree(&shape);
        let ids = all_ids(&tree);
        let engine = SelectionEngine::new(tree, Vec::<String>::new(), EngineOptions::default());

        let id = pick(&ids, n);
        let path = engine.resolve_display_path(id);
        let segments: Vec<&str> = path.split(" > ").collect();

        let label = id.to_uppercase();

        prop_assert_eq!(Some(segments.len()), engine.tree().depth_of(id));
        prop_assert_eq!(segments.last().copied(), Some(label.as_str()));
    }

    /// PROPERTY: initial values are taken as given, unknown ones included.
    #[test]
    fn property_initial_values_are_preserved(
        shape in shape(),
        picks in proptest::collection::vec(any::<usize>(), 0..8),
    ) {
        let tree = build_tree(&shape);
        let ids = all_ids(&tree);
        let mut initial: Vec<String> = picks.iter().map(|&n| pick(&ids, n).to_string()).collect();
        initial.push("gone".to_string());

        let engine = SelectionEngine::new(tree, initial.clone(), EngineOptions::default());

        let mut expected: Vec<String> = Vec::new();
        for id in initial {
            if !expected.contains(&id) {
                expected.push(id);
            }
        }
        prop_assert_eq!(engine.selected_ids(), expected);
        prop_assert_eq!(engine.stale_ids().to_vec(), vec!["gone".to_string()]);
    }
}
