//! Scripted selection actions

use std::fmt;
use std::str::FromStr;

use crate::domain::services::SelectionEngine;
use crate::error::SkilltreeError;

/// One user interaction, as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Checkbox click on a node
    Toggle(String),
    /// Chevron click on a branch
    Expand(String),
    /// Badge "×" on a selected id
    Remove(String),
    /// Reset the whole selection
    Clear,
}

impl Action {
    /// Run against an engine; true if anything changed
    pub fn apply(&self, engine: &mut SelectionEngine) -> bool {
        match self {
            Action::Toggle(id) => engine.toggle_selection(id).is_some(),
            Action::Expand(id) => engine.toggle_expansion(id),
            Action::Remove(id) => engine.remove_selection(id),
            Action::Clear => engine.clear(),
        }
    }
}

impl FromStr for Action {
    type Err = SkilltreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SkilltreeError::InvalidAction {
            input: s.to_string(),
        };

        let s = s.trim();
        if s == "clear" {
            return Ok(Action::Clear);
        }

        let (verb, id) = s.split_once(':').ok_or_else(invalid)?;
        if id.is_empty() {
            return Err(invalid());
        }
        let id = id.to_string();
        match verb {
            "toggle" => Ok(Action::Toggle(id)),
            "expand" => Ok(Action::Expand(id)),
            "remove" => Ok(Action::Remove(id)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Toggle(id) => write!(f, "toggle:{id}"),
            Action::Expand(id) => write!(f, "expand:{id}"),
            Action::Remove(id) => write!(f, "remove:{id}"),
            Action::Clear => write!(f, "clear"),
        }
    }
}
