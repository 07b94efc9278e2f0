//! ItemTree - validated, indexed view over an item forest
//!
//! The tree shape is fixed once built. Every node is indexed by id so the
//! engine can look up parents and descendants without re-walking the forest.

use std::collections::HashMap;

use crate::domain::entities::Item;
use crate::domain::services::walk::{depth_first, find_path};
use crate::error::{SkilltreeError, SkilltreeResult};

/// Maximum nesting: root → child → sub-child
pub const MAX_DEPTH: usize = 3;

/// Separator used for breadcrumb labels
pub const PATH_SEPARATOR: &str = " > ";

#[derive(Debug, Clone)]
struct NodeEntry {
    /// Sibling positions from the roots down to this node
    path: Vec<usize>,
    parent: Option<String>,
    depth: usize,
}

/// Summary counts for a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub roots: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: usize,
}

/// Validated item forest with an id index
#[derive(Debug, Clone, Default)]
pub struct ItemTree {
    roots: Vec<Item>,
    index: HashMap<String, NodeEntry>,
}

impl ItemTree {
    /// Build a tree, rejecting duplicate or empty ids, nodes with both
    /// `children` and `subChildren`, and nesting deeper than [`MAX_DEPTH`].
    pub fn new(roots: Vec<Item>) -> SkilltreeResult<Self> {
        let mut index: HashMap<String, NodeEntry> = HashMap::new();

        for visit in depth_first(&roots, Item::nested) {
            let node = visit.node;
            if node.id.is_empty() {
                return Err(SkilltreeError::EmptyId {
                    label: node.label.clone(),
                });
            }
            if !node.children.is_empty() && !node.sub_children.is_empty() {
                return Err(SkilltreeError::AmbiguousChildren {
                    id: node.id.clone(),
                });
            }
            if visit.depth > MAX_DEPTH {
                return Err(SkilltreeError::TooDeep {
                    id: node.id.clone(),
                    depth: visit.depth,
                    max: MAX_DEPTH,
                });
            }

            // Pre-order guarantees the parent is already indexed
            let mut path = visit
                .parent
                .and_then(|p| index.get(&p.id))
                .map(|entry| entry.path.clone())
                .unwrap_or_default();
            path.push(visit.index);

            let entry = NodeEntry {
                path,
                parent: visit.parent.map(|p| p.id.clone()),
                depth: visit.depth,
            };
            if index.insert(node.id.clone(), entry).is_some() {
                return Err(SkilltreeError::DuplicateId {
                    id: node.id.clone(),
                });
            }
        }

        Ok(Self { roots, index })
    }

    /// Top-level items
    pub fn roots(&self) -> &[Item] {
        &self.roots
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        let entry = self.index.get(id)?;
        let (first, rest) = entry.path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &i in rest {
            node = node.nested().get(i)?;
        }
        Some(node)
    }

    /// True only for known nodes without children
    pub fn is_leaf(&self, id: &str) -> bool {
        self.get(id).is_some_and(Item::is_leaf)
    }

    /// Depth of a node (1 for roots)
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|entry| entry.depth)
    }

    /// The single node whose children contain `id`
    pub fn parent_of(&self, id: &str) -> Option<&Item> {
        let parent = self.index.get(id)?.parent.as_deref()?;
        self.get(parent)
    }

    /// Ancestors of `id`, nearest first
    pub fn ancestors_of(&self, id: &str) -> Vec<&Item> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(node) = current {
            ancestors.push(node);
            current = self.parent_of(&node.id);
        }
        ancestors
    }

    /// Every id reachable below `id`, depth-first; empty for leaves and unknown ids
    pub fn descendant_ids(&self, id: &str) -> Vec<String> {
        self.get(id)
            .map(|node| {
                depth_first(node.nested(), Item::nested)
                    .map(|v| v.node.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Non-leaf descendants of `id`
    pub fn branch_descendants(&self, id: &str) -> Vec<&Item> {
        self.get(id)
            .map(|node| {
                depth_first(node.nested(), Item::nested)
                    .map(|v| v.node)
                    .filter(|n| !n.is_leaf())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Leaves at or below `id`
    pub fn leaf_count(&self, id: &str) -> usize {
        match self.get(id) {
            Some(node) if node.is_leaf() => 1,
            Some(node) => depth_first(node.nested(), Item::nested)
                .filter(|v| v.node.is_leaf())
                .count(),
            None => 0,
        }
    }

    /// All nodes in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        depth_first(&self.roots, Item::nested).map(|v| v.node)
    }

    /// Breadcrumb of labels from the root down to `id`
    pub fn display_path(&self, id: &str) -> Option<String> {
        let chain = find_path(&self.roots, Item::nested, |item| item.id == id)?;
        let labels: Vec<&str> = chain.iter().map(|item| item.label.as_str()).collect();
        Some(labels.join(PATH_SEPARATOR))
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            roots: self.roots.len(),
            ..TreeStats::default()
        };
        for visit in depth_first(&self.roots, Item::nested) {
            stats.nodes += 1;
            if visit.node.is_leaf() {
                stats.leaves += 1;
            }
            stats.max_depth = stats.max_depth.max(visit.depth);
        }
        stats
    }
}
