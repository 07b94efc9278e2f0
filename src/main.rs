//! Skilltree CLI - hierarchical skills and interests picker
//!
//! Usage: skilltree <COMMAND>
//!
//! Commands:
//!   check   Validate an item tree and print its shape
//!   path    Print the breadcrumb label path for an id
//!   apply   Apply scripted actions and print the resulting selection
//!   pick    Pick interactively in the terminal

mod commands;
mod ui;

use clap::Parser;
use skilltree::config::Config;
use skilltree::presentation::Cli;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::run(&cli) {
        // config may be what failed, so report with defaults
        let ctx = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
        ui::error::print_error(
            &err,
            commands::command_name(&cli.command),
            ctx.json,
            ctx.color,
            ctx.unicode,
        );
        std::process::exit(1);
    }
}
