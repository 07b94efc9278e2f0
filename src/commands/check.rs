//! Check command: validate an item file

use anyhow::Result;
use serde::Serialize;
use skilltree::application::OpenOptions;
use skilltree::presentation::{create_selection_use_case, TreeArgs};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::CompleteEvent, events::DataEvent};
use crate::ui::output;
use crate::ui::views::check::render_check_result;

#[derive(Serialize)]
struct CheckData {
    file: String,
    roots: usize,
    nodes: usize,
    leaves: usize,
    max_depth: usize,
}

pub fn cmd_check(tree: &TreeArgs, ui: &UiContext) -> Result<()> {
    output::log_items_source(ui, &tree.items, tree.rows);

    let use_case = create_selection_use_case(&tree.items, tree.rows, None, OpenOptions::new());
    let stats = use_case.load_tree()?.stats();

    if ui.json {
        emit_event(&DataEvent::new(
            "check",
            CheckData {
                file: tree.items.display().to_string(),
                roots: stats.roots,
                nodes: stats.nodes,
                leaves: stats.leaves,
                max_depth: stats.max_depth,
            },
        ))?;
        emit_event(&CompleteEvent::success("check"))?;
    } else if !ui.is_quiet() {
        print!(
            "{}",
            render_check_result(&tree.items, &stats, ui.color, ui.unicode)
        );
    }
    Ok(())
}
