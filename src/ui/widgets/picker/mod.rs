//! Picker Widget
//!
//! Terminal rendition of the hierarchical multi-select field: an expandable
//! tree with per-node selection state, a badge line of selected leaves, and
//! a breadcrumb for the row under the cursor.
//!
//! # Module Structure
//!
//! - `menu` - Picker state: visible rows, cursor, action handling
//! - `render` - String rendering of rows, badges and bars
//! - `input` - Keyboard mapping and the raw-mode loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::Picker;
