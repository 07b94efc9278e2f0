#![no_main]

use libfuzzer_sys::fuzz_target;
use skilltree::{EngineOptions, Item, ItemTree, SelectionEngine};

fuzz_target!(|data: &[u8]| {
    let Ok(items) = serde_json::from_slice::<Vec<Item>>(data) else {
        return;
    };
    let Ok(tree) = ItemTree::new(items) else {
        return;
    };

    // Toggle every node once; the engine must never panic on a valid tree
    let ids: Vec<String> = tree.iter().map(|item| item.id.clone()).collect();
    let mut engine = SelectionEngine::new(tree, Vec::<String>::new(), EngineOptions::default());
    for id in &ids {
        engine.toggle_selection(id);
        let _ = engine.resolve_display_path(id);
    }
    let _ = engine.badges();
});
