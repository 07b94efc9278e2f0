//! Path command: breadcrumb for one id

use anyhow::Result;
use serde::Serialize;
use skilltree::application::OpenOptions;
use skilltree::presentation::{create_selection_use_case, TreeArgs};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::CompleteEvent, events::DataEvent};

#[derive(Serialize)]
struct PathData<'a> {
    id: &'a str,
    path: String,
    known: bool,
}

pub fn cmd_path(id: &str, tree: &TreeArgs, ui: &UiContext) -> Result<()> {
    let use_case = create_selection_use_case(
        &tree.items,
        tree.rows,
        None,
        OpenOptions::new().with_initial(Vec::new()),
    );
    let engine = use_case.open()?;
    let path = engine.resolve_display_path(id);

    if ui.json {
        emit_event(&DataEvent::new(
            "path",
            PathData {
                id,
                path,
                known: engine.tree().contains(id),
            },
        ))?;
        emit_event(&CompleteEvent::success("path"))?;
    } else {
        println!("{path}");
    }
    Ok(())
}
