//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::EngineOptions;
use crate::domain::value_objects::{PropagationMode, StaleIdPolicy};
use crate::error::SkilltreeResult;

use super::loader::{self, ConfigWarning};

/// Selection engine behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub propagation: PropagationMode,

    #[serde(default)]
    pub stale_ids: StaleIdPolicy,

    #[serde(default = "default_true")]
    pub expand_on_select: bool,

    /// Reject empty selections on submit
    #[serde(default = "default_true")]
    pub require_selection: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            propagation: PropagationMode::default(),
            stale_ids: StaleIdPolicy::default(),
            expand_on_select: true,
            require_selection: true,
        }
    }
}

/// Which record column holds the selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(default = "default_column")]
    pub column: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
        }
    }
}

fn default_column() -> String {
    "skills".to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Combine with the `-v` count from the command line
    pub fn raised_by(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Self::Quiet | Self::Normal, 1) => Self::Verbose,
            (Self::Verbose, 1) => Self::Verbose,
            _ => Self::Debug,
        }
    }
}

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub record: RecordConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// None when only defaults (and env) apply
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SkilltreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SkilltreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve from an explicit path, the working directory, the user config
    /// directory, or defaults; env overrides apply last.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> SkilltreeResult<LoadedConfig> {
        loader::resolve(explicit, cwd)
    }

    /// Apply environment variable overrides (SKILLTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Engine options derived from `[selection]`
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            propagation: self.selection.propagation,
            stale_ids: self.selection.stale_ids,
            expand_on_select: self.selection.expand_on_select,
        }
    }
}
