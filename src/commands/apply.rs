//! Apply command: scripted selection session

use anyhow::Result;
use skilltree::application::{Action, SessionSummary};
use skilltree::config::Config;
use skilltree::infrastructure::JsonSelectionSink;
use skilltree::presentation::{create_selection_use_case, SessionArgs};
use skilltree::StaleIdPolicy;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::CompleteEvent, events::DataEvent};
use crate::ui::output;
use crate::ui::views::selection::{render_saved, render_selection};

use super::{display, open_options};

pub fn cmd_apply(
    session: &SessionArgs,
    write: bool,
    raw_actions: &[String],
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    // Reject malformed input before touching anything
    let actions = raw_actions
        .iter()
        .map(|raw| raw.parse::<Action>())
        .collect::<Result<Vec<_>, _>>()?;

    output::log_items_source(ui, &session.tree.items, session.tree.rows);
    let options = open_options(session, config);
    let use_case = create_selection_use_case(
        &session.tree.items,
        session.tree.rows,
        session.record.as_deref(),
        options,
    );

    let mut engine = use_case.open()?;
    output::print_stale_ids(
        ui,
        "apply",
        engine.stale_ids(),
        engine.options().stale_ids == StaleIdPolicy::Drop,
    );
    if ui.json {
        engine.set_listener(Box::new(JsonSelectionSink::stdout()));
    }

    for outcome in use_case.apply(&mut engine, &actions) {
        let note = if outcome.changed { "" } else { " (no change)" };
        output::verbose(ui, format!("{}{}", outcome.action, note));
    }

    let summary = SessionSummary::of(&engine);
    let saved = if write {
        use_case.submit(&engine, true)?.saved_column
    } else {
        None
    };

    if ui.json {
        emit_event(&DataEvent::new("apply", &summary))?;
        emit_event(&CompleteEvent::success("apply").with_saved(saved))?;
        return Ok(());
    }

    print!("{}", render_selection(&summary, ui.color, ui.unicode));
    if let Some(column) = saved {
        if !ui.is_quiet() {
            print!(
                "{}",
                render_saved(
                    summary.selected.len(),
                    &column,
                    &display(session.record.as_deref()),
                    ui.color,
                    ui.unicode
                )
            );
        }
    }
    Ok(())
}
