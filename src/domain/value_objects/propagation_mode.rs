//! Propagation Mode Value Object
//!
//! Controls how far automatic parent promotion/demotion travels after a
//! selection toggle.

use serde::{Deserialize, Serialize};

/// How parent re-evaluation propagates after `toggle_selection`
///
/// - `Ancestors`: re-evaluate every ancestor bottom-up (default)
/// - `SingleLevel`: re-evaluate only the direct parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropagationMode {
    #[default]
    Ancestors,
    SingleLevel,
}

impl PropagationMode {
    /// Parse a user-supplied name, accepting a few spellings
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ancestors" | "recursive" | "all" => Some(Self::Ancestors),
            "single-level" | "single_level" | "single" | "parent" => Some(Self::SingleLevel),
            _ => None,
        }
    }
}
