//! Picker state management and action handling.

use skilltree::domain::entities::Item;
use skilltree::{SelectionEngine, SelectionState, StaleIdPolicy};

use super::render::{
    render_badges, render_breadcrumb, render_help_bar, render_row, render_status_bar,
};

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub id: String,
    pub label: String,
    /// 0 for roots
    pub depth: usize,
    pub state: SelectionState,
    pub expanded: bool,
    pub has_children: bool,
    /// Leaves at or below this row
    pub leaf_count: usize,
}

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Up,
    Down,
    /// Checkbox
    Toggle,
    /// Expand, or step into the first child when already expanded
    Expand,
    /// Collapse, or step out to the parent when already collapsed
    Collapse,
    /// Chevron
    ToggleExpansion,
    /// Badge "×" for the row under the cursor
    Remove,
    Clear,
    Confirm,
    Quit,
}

/// Interactive picker over one selection session
pub struct Picker {
    engine: SelectionEngine,
    cursor: usize,
    rows: Vec<PickerRow>,
}

impl Picker {
    pub fn new(engine: SelectionEngine) -> Self {
        let mut picker = Self {
            engine,
            cursor: 0,
            rows: Vec::new(),
        };
        picker.rebuild_rows();
        picker
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn into_engine(self) -> SelectionEngine {
        self.engine
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Id of the row under the cursor
    pub fn current_id(&self) -> Option<&str> {
        self.rows.get(self.cursor).map(|row| row.id.as_str())
    }

    fn rebuild_rows(&mut self) {
        let mut rows = Vec::new();
        for root in self.engine.tree().roots() {
            Self::push_visible(&self.engine, root, 0, &mut rows);
        }
        self.rows = rows;
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn push_visible(engine: &SelectionEngine, item: &Item, depth: usize, rows: &mut Vec<PickerRow>) {
        let expanded = engine.is_expanded(&item.id);
        rows.push(PickerRow {
            id: item.id.clone(),
            label: item.label.clone(),
            depth,
            state: engine.selection_state(&item.id),
            expanded,
            has_children: !item.is_leaf(),
            leaf_count: engine.tree().leaf_count(&item.id),
        });
        if expanded {
            for child in item.nested() {
                Self::push_visible(engine, child, depth + 1, rows);
            }
        }
    }

    fn move_to(&mut self, id: &str) {
        if let Some(index) = self.rows.iter().position(|row| row.id == id) {
            self.cursor = index;
        }
    }

    /// Apply an action; true when the picker should close
    pub fn handle_action(&mut self, action: PickerAction) -> bool {
        let Some(current) = self.rows.get(self.cursor).cloned() else {
            return matches!(action, PickerAction::Confirm | PickerAction::Quit);
        };

        match action {
            PickerAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            PickerAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
            }
            PickerAction::Toggle => {
                self.engine.toggle_selection(&current.id);
            }
            PickerAction::Expand => {
                if current.has_children && !current.expanded {
                    self.engine.toggle_expansion(&current.id);
                } else if current.expanded {
                    self.cursor += 1;
                }
            }
            PickerAction::Collapse => {
                if current.expanded {
                    self.engine.toggle_expansion(&current.id);
                } else if let Some(parent) = self.engine.tree().parent_of(&current.id) {
                    let parent_id = parent.id.clone();
                    self.move_to(&parent_id);
                }
            }
            PickerAction::ToggleExpansion => {
                self.engine.toggle_expansion(&current.id);
            }
            PickerAction::Remove => {
                self.engine.remove_selection(&current.id);
            }
            PickerAction::Clear => {
                self.engine.clear();
            }
            PickerAction::Confirm | PickerAction::Quit => return true,
        }

        self.rebuild_rows();
        false
    }

    /// Selected leaves over all leaves
    pub fn leaf_counts(&self) -> (usize, usize) {
        (self.engine.badges().len(), self.engine.tree().stats().leaves)
    }

    /// Tree lines, one per visible row
    pub fn render(&self, unicode: bool, color: bool) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&render_row(row, i == self.cursor, unicode, color));
            out.push('\n');
        }
        out
    }

    pub fn render_badges(&self, width: usize, unicode: bool) -> String {
        render_badges(&self.engine.badges(), width, unicode)
    }

    pub fn render_breadcrumb(&self, unicode: bool, color: bool) -> String {
        match self.current_id() {
            Some(id) => render_breadcrumb(&self.engine.resolve_display_path(id), unicode, color),
            None => String::new(),
        }
    }

    pub fn render_status_bar(&self, unicode: bool) -> String {
        let (selected, total) = self.leaf_counts();
        let dropped = self.engine.options().stale_ids == StaleIdPolicy::Drop;
        render_status_bar(selected, total, self.engine.stale_ids().len(), dropped, unicode)
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}
