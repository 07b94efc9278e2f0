//! Item entity - one node of the selectable hierarchy
//!
//! Items nest up to three levels. Depth-2 nodes carry their children either
//! in `children` or in `subChildren` (the field used by the stored skill trees);
//! [`Item::nested`] hides that distinction from the rest of the crate.

use serde::{Deserialize, Serialize};

/// A node in the selectable hierarchy (category, sub-category, or leaf skill)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, stable across sessions
    pub id: String,
    /// Display label
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
    #[serde(
        default,
        rename = "subChildren",
        alias = "sub_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_children: Vec<Item>,
}

impl Item {
    /// Create a leaf item
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
            sub_children: Vec::new(),
        }
    }

    /// Builder: attach children
    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = children;
        self
    }

    /// Builder: attach sub-children
    pub fn with_sub_children(mut self, sub_children: Vec<Item>) -> Self {
        self.sub_children = sub_children;
        self
    }

    /// Direct descendants, whichever field holds them
    pub fn nested(&self) -> &[Item] {
        if self.children.is_empty() {
            &self.sub_children
        } else {
            &self.children
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.sub_children.is_empty()
    }
}
