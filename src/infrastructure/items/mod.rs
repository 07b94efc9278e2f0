//! Item sources
//!
//! - `ItemFile` - nested documents or skillset rows from JSON/YAML/TOML
//! - `build_items_from_rows` - flat `parent_id` rows → nested forest

mod file;
mod format;
mod rows;

pub use file::{ItemFile, ItemLayout};
pub use format::ItemFormat;
pub use rows::{build_items_from_rows, SkillsetRow};
