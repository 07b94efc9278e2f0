//! Domain Entities
//!
//! - `Item` - one node of the selectable hierarchy
//! - `ItemTree` - validated forest with an id index
//! - `SelectionSet` / `ExpansionMap` - the mutable session state

mod item;
mod selection;
mod tree;

pub use item::Item;
pub use selection::{ExpansionMap, SelectionSet};
pub use tree::{ItemTree, TreeStats, MAX_DEPTH, PATH_SEPARATOR};
