//! File-backed item source
//!
//! Loads either a nested item document or a flat `skillsets` row dump from a
//! JSON, YAML or TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::format::ItemFormat;
use super::rows::{build_items_from_rows, SkillsetRow};
use crate::domain::entities::Item;
use crate::domain::ports::ItemSource;
use crate::error::SkilltreeResult;

/// Shape of the data inside an item file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemLayout {
    /// Nested `Item` documents
    #[default]
    Nested,
    /// Flat rows linked by `parent_id`
    Rows,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemDocument {
    List(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RowDocument {
    List(Vec<SkillsetRow>),
    Wrapped {
        #[serde(alias = "rows")]
        skillsets: Vec<SkillsetRow>,
    },
}

/// Item source reading a single file
#[derive(Debug, Clone)]
pub struct ItemFile {
    path: PathBuf,
    layout: ItemLayout,
}

impl ItemFile {
    pub fn new(path: impl Into<PathBuf>, layout: ItemLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for ItemFile {
    fn load_items(&self) -> SkilltreeResult<Vec<Item>> {
        let format = ItemFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)?;

        match self.layout {
            ItemLayout::Nested => {
                let document: ItemDocument = format.parse(&content, &self.path)?;
                Ok(match document {
                    ItemDocument::List(items) | ItemDocument::Wrapped { items } => items,
                })
            }
            ItemLayout::Rows => {
                let document: RowDocument = format.parse(&content, &self.path)?;
                let rows = match document {
                    RowDocument::List(rows) | RowDocument::Wrapped { skillsets: rows } => rows,
                };
                build_items_from_rows(&rows)
            }
        }
    }
}
