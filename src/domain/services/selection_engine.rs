//! Hierarchical selection engine.
//!
//! Owns the selection set and expansion map for one session over an immutable
//! [`ItemTree`]:
//!
//! - selecting a node selects every descendant, deselecting clears them;
//! - after a toggle the parent is promoted when all of its direct children are
//!   selected and demoted otherwise (see [`PropagationMode`] for how far up);
//! - expansion follows selection for the toggled branch.
//!
//! Unknown ids are ignored by every operation.

use std::fmt;

use crate::domain::entities::{ExpansionMap, ItemTree, SelectionSet};
use crate::domain::ports::SelectionListener;
use crate::domain::value_objects::{PropagationMode, SelectionState, StaleIdPolicy};

/// Options fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub propagation: PropagationMode,
    pub stale_ids: StaleIdPolicy,
    /// Expand on select, collapse on deselect
    pub expand_on_select: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            propagation: PropagationMode::default(),
            stale_ids: StaleIdPolicy::default(),
            expand_on_select: true,
        }
    }
}

/// What `toggle_selection` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Selected,
    Deselected,
}

/// A selected leaf, shown as a removable tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub label: String,
    /// Breadcrumb for tooltips
    pub path: String,
}

pub struct SelectionEngine {
    tree: ItemTree,
    selected: SelectionSet,
    expanded: ExpansionMap,
    options: EngineOptions,
    stale: Vec<String>,
    listener: Option<Box<dyn SelectionListener>>,
}

impl fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("selected", &self.selected)
            .field("expanded", &self.expanded)
            .field("options", &self.options)
            .field("stale", &self.stale)
            .field("listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl SelectionEngine {
    /// Open a session seeded with `initial_values`.
    ///
    /// Every pre-selected branch and every ancestor of a pre-selected node
    /// starts expanded.
    pub fn new<I, S>(tree: ItemTree, initial_values: I, options: EngineOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected = SelectionSet::new();
        let mut stale: Vec<String> = Vec::new();

        for id in initial_values {
            let id = id.into();
            if !tree.contains(&id) {
                if !stale.contains(&id) {
                    stale.push(id.clone());
                }
                if options.stale_ids == StaleIdPolicy::Drop {
                    continue;
                }
            }
            selected.insert(id);
        }

        let mut expanded = ExpansionMap::new();
        for id in selected.iter() {
            let Some(item) = tree.get(id) else {
                continue;
            };
            if !item.is_leaf() {
                expanded.set(id, true);
            }
            for ancestor in tree.ancestors_of(id) {
                expanded.set(ancestor.id.clone(), true);
            }
        }

        Self {
            tree,
            selected,
            expanded,
            options,
            stale,
            listener: None,
        }
    }

    /// Builder: register the `on_change` listener
    pub fn with_listener(mut self, listener: impl SelectionListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: Box<dyn SelectionListener>) {
        self.listener = Some(listener);
    }

    pub fn tree(&self) -> &ItemTree {
        &self.tree
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Initial ids that were not found in the tree
    pub fn stale_ids(&self) -> &[String] {
        &self.stale
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selected
    }

    /// The list reported upward and persisted
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.to_vec()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.is_expanded(id)
    }

    pub fn expansion(&self) -> &ExpansionMap {
        &self.expanded
    }

    /// Flip the expanded flag of a branch. Leaves and unknown ids are ignored.
    pub fn toggle_expansion(&mut self, id: &str) -> bool {
        match self.tree.get(id) {
            Some(item) if !item.is_leaf() => {
                self.expanded.toggle(id);
                true
            }
            _ => false,
        }
    }

    /// Cascade-select or cascade-deselect `id`, then re-evaluate its ancestors.
    ///
    /// Returns `None` for unknown ids, in which case nothing changes and the
    /// listener is not called.
    pub fn toggle_selection(&mut self, id: &str) -> Option<Toggled> {
        let is_branch = !self.tree.get(id)?.is_leaf();
        let descendants = self.tree.descendant_ids(id);
        let branches: Vec<String> = self
            .tree
            .branch_descendants(id)
            .into_iter()
            .map(|item| item.id.clone())
            .collect();

        let outcome = if self.selected.contains(id) {
            self.selected.remove(id);
            for descendant in &descendants {
                self.selected.remove(descendant);
            }
            Toggled::Deselected
        } else {
            self.selected.insert(id);
            for descendant in &descendants {
                self.selected.insert(descendant.as_str());
            }
            Toggled::Selected
        };

        if self.options.expand_on_select {
            let expand = outcome == Toggled::Selected;
            if is_branch {
                self.expanded.set(id, expand);
            }
            for branch in branches {
                self.expanded.set(branch, expand);
            }
        }

        self.reevaluate_ancestors(id);
        self.emit();
        Some(outcome)
    }

    /// Remove exactly `id` from the selection (badge "×").
    ///
    /// No cascade and no parent re-evaluation. Returns false if `id` was not
    /// selected.
    pub fn remove_selection(&mut self, id: &str) -> bool {
        if !self.selected.remove(id) {
            return false;
        }
        self.emit();
        true
    }

    /// Empty the selection (form reset)
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        self.emit();
        true
    }

    /// Breadcrumb of labels down to `id`, or the raw id when unknown
    pub fn resolve_display_path(&self, id: &str) -> String {
        self.tree
            .display_path(id)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn selection_state(&self, id: &str) -> SelectionState {
        if self.selected.contains(id) {
            SelectionState::Selected
        } else if self
            .tree
            .descendant_ids(id)
            .iter()
            .any(|d| self.selected.contains(d))
        {
            SelectionState::Partial
        } else {
            SelectionState::Unselected
        }
    }

    /// Selected leaves in selection order. Branches and stale ids are not badged.
    pub fn badges(&self) -> Vec<Badge> {
        self.selected
            .iter()
            .filter_map(|id| {
                let item = self.tree.get(id)?;
                item.is_leaf().then(|| Badge {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    path: self.resolve_display_path(id),
                })
            })
            .collect()
    }

    fn reevaluate_ancestors(&mut self, id: &str) {
        let mut current = id.to_string();
        while let Some(parent) = self.tree.parent_of(&current) {
            let all_selected = parent
                .nested()
                .iter()
                .all(|child| self.selected.contains(&child.id));
            let parent_id = parent.id.clone();

            if all_selected {
                self.selected.insert(parent_id.as_str());
            } else {
                self.selected.remove(&parent_id);
            }

            if self.options.propagation == PropagationMode::SingleLevel {
                break;
            }
            current = parent_id;
        }
    }

    fn emit(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let snapshot = self.selected.to_vec();
            listener.on_change(&snapshot);
        }
    }
}
