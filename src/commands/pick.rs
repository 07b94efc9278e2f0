//! Pick command: interactive terminal picker

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use skilltree::application::SessionSummary;
use skilltree::config::Config;
use skilltree::presentation::{create_selection_use_case, SessionArgs};
use skilltree::{SkilltreeError, StaleIdPolicy};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::CompleteEvent, events::DataEvent};
use crate::ui::output;
use crate::ui::views::selection::{render_saved, render_selection};
use crate::ui::widgets::picker::{run_interactive, Picker};

use super::{display, open_options};

pub fn cmd_pick(session: &SessionArgs, yes: bool, config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.caps.is_tty || !ui.caps.stdin_tty {
        return Err(SkilltreeError::NotATerminal.into());
    }

    output::log_items_source(ui, &session.tree.items, session.tree.rows);
    let options = open_options(session, config);
    let column = options.column.clone();
    let use_case = create_selection_use_case(
        &session.tree.items,
        session.tree.rows,
        session.record.as_deref(),
        options,
    );

    let engine = use_case.open()?;
    let stale = engine.stale_ids().to_vec();
    let dropped = engine.options().stale_ids == StaleIdPolicy::Drop;

    let title = match &session.record {
        Some(record) => format!("Skilltree: {} ({})", record.display(), column),
        None => "Skilltree".to_string(),
    };
    let mut picker = Picker::new(engine);
    let confirmed = run_interactive(&mut picker, &title, ui)?;

    // The picker screen is gone by now; report stale ids where they stay visible
    output::print_stale_ids(ui, "pick", &stale, dropped);

    if confirmed.is_none() {
        if ui.json {
            emit_event(&CompleteEvent::cancelled("pick"))?;
        } else if !ui.is_quiet() {
            eprintln!("Cancelled. Nothing was saved.");
        }
        return Ok(());
    }

    let engine = picker.into_engine();
    let summary = SessionSummary::of(&engine);
    let persist = session.record.is_some() && (yes || confirm_save(&summary, &column, ui)?);
    let result = use_case.submit(&engine, persist)?;

    if ui.json {
        emit_event(&DataEvent::new("pick", &summary))?;
        emit_event(&CompleteEvent::success("pick").with_saved(result.saved_column))?;
        return Ok(());
    }

    print!("{}", render_selection(&summary, ui.color, ui.unicode));
    if let Some(column) = result.saved_column {
        print!(
            "{}",
            render_saved(
                result.selected.len(),
                &column,
                &display(session.record.as_deref()),
                ui.color,
                ui.unicode
            )
        );
    }
    Ok(())
}

fn confirm_save(summary: &SessionSummary, column: &str, ui: &UiContext) -> Result<bool> {
    if ui.json {
        return Ok(false);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Save {} selected id(s) to '{}'?",
            summary.selected.len(),
            column
        ))
        .default(true)
        .interact()?;
    Ok(confirmed)
}
