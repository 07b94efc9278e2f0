//! Skillset rows → item tree
//!
//! The `skillsets` table stores the hierarchy as flat rows linked by
//! `parent_id`. Rows are assembled into the nested shape the engine expects:
//! depth-2 nodes keep their children in `subChildren`.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Item, MAX_DEPTH};
use crate::error::{SkilltreeError, SkilltreeResult};

/// One row of the `skillsets` table. Extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsetRow {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    #[serde(alias = "label")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_id_from_text_or_number")]
    pub parent_id: Option<String>,
}

impl SkillsetRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
        }
    }

    fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn id_from_text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(Into::into)
}

fn optional_id_from_text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(Into::into))
}

/// Assemble rows into a forest, preserving row order among siblings.
pub fn build_items_from_rows(rows: &[SkillsetRow]) -> SkilltreeResult<Vec<Item>> {
    let mut known: HashSet<&str> = HashSet::new();
    for row in rows {
        if row.id.is_empty() {
            return Err(SkilltreeError::EmptyId {
                label: row.name.clone(),
            });
        }
        if !known.insert(row.id.as_str()) {
            return Err(SkilltreeError::DuplicateId { id: row.id.clone() });
        }
    }

    let mut roots: Vec<&SkillsetRow> = Vec::new();
    let mut children_of: HashMap<&str, Vec<&SkillsetRow>> = HashMap::new();
    for row in rows {
        match row.parent() {
            None => roots.push(row),
            Some(parent) if known.contains(parent) => {
                children_of.entry(parent).or_default().push(row)
            }
            Some(parent) => {
                return Err(SkilltreeError::UnknownParent {
                    id: row.id.clone(),
                    parent: parent.to_string(),
                })
            }
        }
    }

    let mut built: HashSet<&str> = HashSet::new();
    let items = roots
        .into_iter()
        .map(|row| build_node(row, 1, &children_of, &mut built))
        .collect::<SkilltreeResult<Vec<Item>>>()?;

    if built.len() < rows.len() {
        let ids = rows
            .iter()
            .filter(|row| !built.contains(row.id.as_str()))
            .map(|row| row.id.clone())
            .collect();
        return Err(SkilltreeError::UnreachableRows { ids });
    }

    Ok(items)
}

fn build_node<'a>(
    row: &'a SkillsetRow,
    depth: usize,
    children_of: &HashMap<&str, Vec<&'a SkillsetRow>>,
    built: &mut HashSet<&'a str>,
) -> SkilltreeResult<Item> {
    if depth > MAX_DEPTH {
        return Err(SkilltreeError::TooDeep {
            id: row.id.clone(),
            depth,
            max: MAX_DEPTH,
        });
    }
    built.insert(row.id.as_str());

    let nested = match children_of.get(row.id.as_str()) {
        Some(children) => children
            .iter()
            .map(|child| build_node(child, depth + 1, children_of, built))
            .collect::<SkilltreeResult<Vec<Item>>>()?,
        None => Vec::new(),
    };

    let item = Item::new(row.id.clone(), row.name.clone());
    Ok(if depth == 2 {
        item.with_sub_children(nested)
    } else {
        item.with_children(nested)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SkillsetRow> {
        vec![
            SkillsetRow::new("dev", "Development", None),
            SkillsetRow::new("web", "Web", Some("dev")),
            SkillsetRow::new("react", "React", Some("web")),
            SkillsetRow::new("design", "Design", None),
            SkillsetRow::new("backend", "Backend", Some("dev")),
        ]
    }

    #[test]
    fn builds_three_levels_with_sub_children() {
        let items = build_items_from_rows(&rows()).unwrap();
        assert_eq!(items.len(), 2);

        let dev = &items[0];
        let child_ids: Vec<&str> = dev.children.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(child_ids, ["web", "backend"]);

        let web = &dev.children[0];
        assert!(web.children.is_empty());
        assert_eq!(web.sub_children[0].id, "react");
    }

    #[test]
    fn rejects_unknown_parent() {
        let err = build_items_from_rows(&[SkillsetRow::new("a", "A", Some("missing"))]).unwrap_err();
        assert!(matches!(err, SkilltreeError::UnknownParent { parent, .. } if parent == "missing"));
    }

    #[test]
    fn rejects_duplicate_rows() {
        let err = build_items_from_rows(&[
            SkillsetRow::new("a", "A", None),
            SkillsetRow::new("a", "A again", None),
        ])
        .unwrap_err();
        assert!(matches!(err, SkilltreeError::DuplicateId { .. }));
    }

    #[test]
    fn rejects_cycles_as_unreachable() {
        let err = build_items_from_rows(&[
            SkillsetRow::new("root", "Root", None),
            SkillsetRow::new("a", "A", Some("b")),
            SkillsetRow::new("b", "B", Some("a")),
        ])
        .unwrap_err();
        match err {
            SkilltreeError::UnreachableRows { ids } => assert_eq!(ids, ["a", "b"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_fourth_level() {
        let err = build_items_from_rows(&[
            SkillsetRow::new("a", "A", None),
            SkillsetRow::new("b", "B", Some("a")),
            SkillsetRow::new("c", "C", Some("b")),
            SkillsetRow::new("d", "D", Some("c")),
        ])
        .unwrap_err();
        assert!(matches!(err, SkilltreeError::TooDeep { id, .. } if id == "d"));
    }

    #[test]
    fn empty_parent_id_is_a_root() {
        let items = build_items_from_rows(&[SkillsetRow::new("a", "A", Some(""))]).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn deserializes_numeric_ids_and_ignores_extra_columns() {
        let json = r#"[
            { "id": 1, "name": "Development", "parent_id": null, "created_at": "2024-01-01" },
            { "id": 2, "label": "Web", "parent_id": 1 }
        ]"#;
        let rows: Vec<SkillsetRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[1].name, "Web");
        assert_eq!(rows[1].parent_id.as_deref(), Some("1"));
    }
}
