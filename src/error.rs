//! Error types for skilltree
//!
//! Uses `thiserror` for library errors. Engine operations never fail;
//! every variant here comes from a boundary (loading, records, config, CLI input).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for skilltree operations
pub type SkilltreeResult<T> = Result<T, SkilltreeError>;

/// Main error type for skilltree operations
#[derive(Error, Debug)]
pub enum SkilltreeError {
    /// Two nodes share the same id
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },

    /// A node has an empty id
    #[error("item with label '{label}' has an empty id")]
    EmptyId { label: String },

    /// A node populates both `children` and `subChildren`
    #[error("item '{id}' has both children and subChildren")]
    AmbiguousChildren { id: String },

    /// Tree nesting exceeds the supported depth
    #[error("item '{id}' is nested {depth} levels deep (maximum is {max})")]
    TooDeep { id: String, depth: usize, max: usize },

    /// A skillset row references a parent that does not exist
    #[error("skillset row '{id}' references unknown parent '{parent}'")]
    UnknownParent { id: String, parent: String },

    /// Rows that can never be reached from a root (parent cycle)
    #[error("skillset rows unreachable from any root: {}", ids.join(", "))]
    UnreachableRows { ids: Vec<String> },

    /// File extension not recognized as an item format
    #[error("unsupported item file format: {file} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { file: PathBuf },

    /// TOML item file could not be parsed
    #[error("invalid TOML in {file}: {message}")]
    Toml { file: PathBuf, message: String },

    /// Record column has the wrong shape
    #[error("invalid record {file}: column '{column}' {message}")]
    InvalidRecord {
        file: PathBuf,
        column: String,
        message: String,
    },

    /// Submission rejected because nothing is selected
    #[error("at least one item must be selected")]
    EmptySelection,

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Scripted action could not be parsed
    #[error("invalid action '{input}' (expected toggle:<id>, expand:<id>, remove:<id> or clear)")]
    InvalidAction { input: String },

    /// Interactive picker needs a terminal
    #[error("interactive picker requires a terminal; use `skilltree apply` instead")]
    NotATerminal,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
