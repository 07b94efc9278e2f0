//! Selection state of a single node, as shown to the user

/// Selection state for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// In the selection set (●)
    Selected,
    /// Not selected and nothing below it is (○)
    Unselected,
    /// Not selected, but some descendant is (◐)
    Partial,
}
