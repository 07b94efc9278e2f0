//! Property tests for assembling flat skillset rows into a tree.

use proptest::prelude::*;

use skilltree::infrastructure::items::{build_items_from_rows, SkillsetRow};
use skilltree::ItemTree;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: row assembly never panics on arbitrary parent links.
    #[test]
    fn property_rows_never_panic(
        parents in proptest::collection::vec(proptest::option::of(0usize..12), 0..12),
    ) {
        let rows: Vec<SkillsetRow> = parents
            .iter()
            .enumerate()
            .map(|(i, parent)| {
                let parent = parent.map(|p| p.to_string());
                SkillsetRow::new(i.to_string(), format!("Row {i}"), parent.as_deref())
            })
            .collect();

        if let Ok(items) = build_items_from_rows(&rows) {
            // Anything assembled is also a valid tree with every row in it
            let tree = ItemTree::new(items).unwrap();
            prop_assert_eq!(tree.len(), rows.len());
        }
    }

    /// PROPERTY: rows that only point at earlier rows within three levels
    /// always assemble.
    #[test]
    fn property_shallow_forward_rows_assemble(
        links in proptest::collection::vec(any::<usize>(), 1..10),
    ) {
        let mut depth: Vec<usize> = Vec::new();
        let mut rows = Vec::new();
        for (i, n) in links.iter().enumerate() {
            let candidates: Vec<usize> = (0..i).filter(|&j| depth[j] < 3).collect();
            let parent = if candidates.is_empty() || n % 3 == 0 {
                None
            } else {
                Some(candidates[n % candidates.len()])
            };
            depth.push(parent.map_or(1, |p| depth[p] + 1));
            let parent = parent.map(|p| p.to_string());
            rows.push(SkillsetRow::new(i.to_string(), format!("Row {i}"), parent.as_deref()));
        }

        let items = build_items_from_rows(&rows).unwrap();
        prop_assert_eq!(ItemTree::new(items).unwrap().len(), rows.len());
    }
}
