//! Tag entities
//!
//! `TagRecord` is the flat, parent-pointer row handed over by the data
//! layer. `Node` is the same tag placed in a tree, owning its children.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TaxonomyDimension;

/// Flat tag row as supplied by the data-access collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    pub id: String,
    pub name: String,
    pub dimension: TaxonomyDimension,
    pub level: u32,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub sort_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_count: Option<u32>,
}

impl TagRecord {
    /// Create a root record (level 1, no parent)
    pub fn root(
        id: impl Into<String>,
        name: impl Into<String>,
        dimension: TaxonomyDimension,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dimension,
            level: 1,
            parent_id: None,
            sort_order,
            description: None,
            article_count: None,
        }
    }

    /// Create a child record one level below `parent_level`
    pub fn child(
        id: impl Into<String>,
        name: impl Into<String>,
        dimension: TaxonomyDimension,
        parent_id: impl Into<String>,
        parent_level: u32,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dimension,
            level: parent_level + 1,
            parent_id: Some(parent_id.into()),
            sort_order,
            description: None,
            article_count: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_article_count(mut self, count: u32) -> Self {
        self.article_count = Some(count);
        self
    }
}

/// A tag placed in its tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub dimension: TaxonomyDimension,
    pub level: u32,
    pub parent_id: Option<String>,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_count: Option<u32>,
    /// Child nodes, ordered by `sort_order` (empty for leaves)
    pub children: Vec<Node>,
}

impl From<TagRecord> for Node {
    fn from(record: TagRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            dimension: record.dimension,
            level: record.level,
            parent_id: record.parent_id,
            sort_order: record.sort_order,
            description: record.description,
            article_count: record.article_count,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Ids of every node below this one, pre-order, excluding self
    pub fn descendant_ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child.id.as_str());
            out.extend(child.descendant_ids());
        }
        out
    }

    /// Ids of the leaves of this subtree (just self for a leaf)
    pub fn leaf_ids(&self) -> Vec<&str> {
        if self.is_leaf() {
            vec![self.id.as_str()]
        } else {
            self.children.iter().flat_map(|c| c.leaf_ids()).collect()
        }
    }

    /// Count of all nodes in this subtree (including self)
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Count of all leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|c| c.leaf_count()).sum()
        }
    }

    /// Depth-first search for a node in this subtree
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}
