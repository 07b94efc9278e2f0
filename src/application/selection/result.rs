//! Selection result types

use serde::Serialize;

use crate::domain::services::{Badge, SelectionEngine};

use super::action::Action;

/// Whether a scripted action changed the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: Action,
    pub changed: bool,
}

/// Snapshot of a session, as reported by `apply` and `pick`
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub selected: Vec<String>,
    pub badges: Vec<BadgeSummary>,
    pub stale: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeSummary {
    pub id: String,
    pub label: String,
    pub path: String,
}

impl From<Badge> for BadgeSummary {
    fn from(badge: Badge) -> Self {
        Self {
            id: badge.id,
            label: badge.label,
            path: badge.path,
        }
    }
}

impl SessionSummary {
    pub fn of(engine: &SelectionEngine) -> Self {
        Self {
            selected: engine.selected_ids(),
            badges: engine.badges().into_iter().map(Into::into).collect(),
            stale: engine.stale_ids().to_vec(),
        }
    }
}

/// Result of submitting a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    /// The flat list handed to the record
    pub selected: Vec<String>,
    /// Column written, None when nothing was persisted
    pub saved_column: Option<String>,
}

impl SubmitResult {
    pub fn was_saved(&self) -> bool {
        self.saved_column.is_some()
    }
}
