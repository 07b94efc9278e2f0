//! Configuration module for skilltree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SKILLTREE_*)
//! 3. `--config PATH`, else `./.skilltree.toml`, else `<config dir>/skilltree/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    ColorMode, Config, LoadedConfig, OutputConfig, RecordConfig, SelectionConfig, Verbosity,
};
