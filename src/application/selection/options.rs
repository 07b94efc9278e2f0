//! Selection session options

use crate::domain::services::EngineOptions;

/// Options for opening and submitting a selection session
#[derive(Debug, Clone)]
pub struct OpenOptions {
    /// Explicit initial ids; when None the record column is read instead
    pub initial: Option<Vec<String>>,
    /// Record column holding the selection
    pub column: String,
    pub engine: EngineOptions,
    /// Reject an empty selection on submit
    pub require_selection: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            initial: None,
            column: "skills".to_string(),
            engine: EngineOptions::default(),
            require_selection: true,
        }
    }
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the session with these ids instead of the record
    pub fn with_initial(mut self, initial: Vec<String>) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_engine(mut self, engine: EngineOptions) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_require_selection(mut self, require: bool) -> Self {
        self.require_selection = require;
        self
    }
}
