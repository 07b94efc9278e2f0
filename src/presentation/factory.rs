//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{OpenOptions, SelectionUseCase};
use crate::infrastructure::{ItemFile, ItemLayout, JsonRecordRepository};

/// Type alias for the concrete SelectionUseCase with all dependencies
pub type ConcreteSelectionUseCase = SelectionUseCase<ItemFile, JsonRecordRepository>;

/// Item layout from the `--rows` flag
pub fn item_layout(rows: bool) -> ItemLayout {
    if rows {
        ItemLayout::Rows
    } else {
        ItemLayout::Nested
    }
}

/// Create a selection use case over an item file and an optional JSON record
pub fn create_selection_use_case(
    items: &Path,
    rows: bool,
    record: Option<&Path>,
    options: OpenOptions,
) -> ConcreteSelectionUseCase {
    let source = ItemFile::new(items, item_layout(rows));
    let record = record.map(JsonRecordRepository::new);
    SelectionUseCase::new(source, record, options)
}
