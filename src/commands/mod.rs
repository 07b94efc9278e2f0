//! Command handlers for the skilltree binary

mod apply;
mod check;
mod path;
mod pick;

use std::path::Path;

use anyhow::{Context, Result};
use skilltree::application::OpenOptions;
use skilltree::config::Config;
use skilltree::presentation::{Cli, Commands, SessionArgs};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::StartEvent};
use crate::ui::output;

/// Name used in JSON events and error reports
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Check { .. } => "check",
        Commands::Path { .. } => "path",
        Commands::Apply { .. } => "apply",
        Commands::Pick { .. } => "pick",
    }
}

/// Dispatch a parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let command = command_name(&cli.command);
    let (ui, config) = prepare(cli, command)?;

    match &cli.command {
        Commands::Check { tree } => check::cmd_check(tree, &ui),
        Commands::Path { id, tree } => path::cmd_path(id, tree, &ui),
        Commands::Apply {
            session,
            write,
            actions,
        } => apply::cmd_apply(session, *write, actions, &config, &ui),
        Commands::Pick { session, yes } => pick::cmd_pick(session, *yes, &config, &ui),
    }
}

/// Resolve config, build the UI context and announce the command
fn prepare(cli: &Cli, command: &str) -> Result<(UiContext, Config)> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let loaded = Config::resolve(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

    if ui.json {
        emit_event(&StartEvent::new(command))?;
    }
    output::log_config_source(&ui, &loaded);
    output::print_config_warnings(&ui, command, &loaded.warnings);

    Ok((ui, loaded.config))
}

/// Session options from config, overridden by command-line flags
fn open_options(session: &SessionArgs, config: &Config) -> OpenOptions {
    let mut options = OpenOptions::new()
        .with_column(
            session
                .column
                .clone()
                .unwrap_or_else(|| config.record.column.clone()),
        )
        .with_engine(config.engine_options())
        .with_require_selection(config.selection.require_selection);
    if let Some(initial) = &session.initial {
        options = options.with_initial(initial.clone());
    }
    options
}

fn display(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
