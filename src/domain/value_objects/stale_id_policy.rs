//! Stale Id Policy Value Object
//!
//! Decides what happens to initial selection ids that no longer exist in the
//! item tree.

use serde::{Deserialize, Serialize};

/// Handling of initial ids missing from the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaleIdPolicy {
    /// Keep them in the selection and report them upward (never badged)
    #[default]
    Preserve,
    /// Drop them when the session opens
    Drop,
}

impl StaleIdPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "preserve" | "keep" => Some(Self::Preserve),
            "drop" | "discard" => Some(Self::Drop),
            _ => None,
        }
    }
}
