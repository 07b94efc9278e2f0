#![no_main]

use libfuzzer_sys::fuzz_target;
use skilltree::infrastructure::items::{build_items_from_rows, SkillsetRow};
use skilltree::ItemTree;

fuzz_target!(|data: &[u8]| {
    let Ok(rows) = serde_json::from_slice::<Vec<SkillsetRow>>(data) else {
        return;
    };
    // Whatever assembles must also pass tree validation
    if let Ok(items) = build_items_from_rows(&rows) {
        assert!(ItemTree::new(items).is_ok());
    }
});
