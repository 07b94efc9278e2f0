//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - `pick` is the only interactive command; everything else is scriptable

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Skilltree - hierarchical skills and interests picker
#[derive(Parser, Debug)]
#[command(name = "skilltree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.skilltree.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the tree comes from
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Item file (.json, .yaml, .yml or .toml)
    #[arg(long, value_name = "FILE")]
    pub items: PathBuf,

    /// Items are flat skillset rows linked by parent_id
    #[arg(long)]
    pub rows: bool,
}

/// Where the selection comes from and goes to
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Initial selection, overriding the record column
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub initial: Option<Vec<String>>,

    /// JSON record holding the selection column
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,

    /// Record column (default from config: skills)
    #[arg(long, value_name = "NAME")]
    pub column: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an item tree and print its shape
    Check {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Print the breadcrumb label path for an id
    Path {
        /// Item id (unknown ids print as-is)
        id: String,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Apply scripted actions and print the resulting selection
    Apply {
        #[command(flatten)]
        session: SessionArgs,

        /// Write the selection back to --record
        #[arg(long, requires = "record")]
        write: bool,

        /// Actions: toggle:ID, expand:ID, remove:ID, clear
        #[arg(value_name = "ACTION")]
        actions: Vec<String>,
    },

    /// Pick interactively in the terminal
    Pick {
        #[command(flatten)]
        session: SessionArgs,

        /// Write back to --record without asking
        #[arg(short, long)]
        yes: bool,
    },
}
