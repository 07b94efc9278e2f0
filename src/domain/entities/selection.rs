//! Selection set and expansion map
//!
//! The two pieces of mutable state a selection session owns. The tree itself
//! never changes.

use std::collections::HashMap;

use indexmap::IndexSet;

/// Selected ids, in the order they were first added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: IndexSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns true if the id was not already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Removes while keeping the order of the remaining ids
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-item expanded flag; absent means collapsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionMap {
    flags: HashMap<String, bool>,
}

impl ExpansionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, expanded: bool) {
        self.flags.insert(id.into(), expanded);
    }

    /// Flip and return the new value
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.flags.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Ids currently expanded, in no particular order
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(id, _)| id.as_str())
    }
}
