//! Forest entity
//!
//! Per-dimension ordered root lists plus two indexes built once at
//! construction: id → location (dimension and child-index path) and
//! id → structural parent id. Nodes never hold back-references.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::tag::Node;
use crate::domain::value_objects::TaxonomyDimension;
use crate::error::{TagTreeError, TagTreeResult};

/// Where a node lives: its dimension and the child indexes from the root list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLocation {
    pub dimension: TaxonomyDimension,
    /// `path[0]` indexes the dimension's root list, each further entry a child list
    pub path: Vec<usize>,
}

/// An orphan record that was re-parented as a root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedOrphan {
    pub id: String,
    /// The parent id the record declared, which did not resolve
    pub missing_parent_id: String,
}

/// Immutable forest of taxonomy trees
#[derive(Debug, Clone, Default)]
pub struct Forest {
    roots: BTreeMap<TaxonomyDimension, Vec<Node>>,
    locations: HashMap<String, NodeLocation>,
    parents: HashMap<String, String>,
    promoted_orphans: Vec<PromotedOrphan>,
}

impl Forest {
    /// Assemble a forest from finished root lists and build its indexes.
    pub(crate) fn from_roots(
        roots: BTreeMap<TaxonomyDimension, Vec<Node>>,
        promoted_orphans: Vec<PromotedOrphan>,
    ) -> Self {
        let mut locations = HashMap::new();
        let mut parents = HashMap::new();

        for (dimension, nodes) in &roots {
            for (i, node) in nodes.iter().enumerate() {
                index_node(node, *dimension, &mut vec![i], &mut locations, &mut parents);
            }
        }

        Self {
            roots,
            locations,
            parents,
            promoted_orphans,
        }
    }

    /// Root nodes of a dimension, in sort order (empty if the dimension has none)
    pub fn roots(&self, dimension: TaxonomyDimension) -> &[Node] {
        self.roots.get(&dimension).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty dimensions with their roots, in dimension display order
    pub fn dimensions(&self) -> impl Iterator<Item = (TaxonomyDimension, &[Node])> {
        self.roots
            .iter()
            .filter(|(_, nodes)| !nodes.is_empty())
            .map(|(d, nodes)| (*d, nodes.as_slice()))
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        let location = self.locations.get(id)?;
        let roots = self.roots.get(&location.dimension)?;
        node_at_path(roots, &location.path)
    }

    /// Look up a node by id, failing with `UnknownNode`
    pub fn get(&self, id: &str) -> TagTreeResult<&Node> {
        self.node(id).ok_or_else(|| TagTreeError::unknown(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn location(&self, id: &str) -> Option<&NodeLocation> {
        self.locations.get(id)
    }

    /// Structural parent of a node (`None` for roots and unknown ids)
    pub fn parent_id(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    /// Ancestor ids, nearest first
    pub fn ancestors(&self, id: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut current = self.parent_id(id);
        while let Some(parent) = current {
            out.push(parent);
            current = self.parent_id(parent);
        }
        out
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Every node, dimension by dimension, each tree in pre-order
    pub fn nodes(&self) -> Vec<&Node> {
        fn walk<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
            out.push(node);
            for child in &node.children {
                walk(child, out);
            }
        }

        let mut out = Vec::with_capacity(self.len());
        for (_, roots) in self.dimensions() {
            for root in roots {
                walk(root, &mut out);
            }
        }
        out
    }

    /// Every leaf id in display order
    pub fn leaf_ids(&self) -> Vec<&str> {
        self.dimensions()
            .flat_map(|(_, roots)| roots.iter().flat_map(|r| r.leaf_ids()))
            .collect()
    }

    /// Leaf ids of one dimension in display order
    pub fn dimension_leaf_ids(&self, dimension: TaxonomyDimension) -> Vec<&str> {
        self.roots(dimension)
            .iter()
            .flat_map(|r| r.leaf_ids())
            .collect()
    }

    /// Orphans that were re-parented as roots during the build
    pub fn promoted_orphans(&self) -> &[PromotedOrphan] {
        &self.promoted_orphans
    }
}

fn index_node(
    node: &Node,
    dimension: TaxonomyDimension,
    path: &mut Vec<usize>,
    locations: &mut HashMap<String, NodeLocation>,
    parents: &mut HashMap<String, String>,
) {
    locations.insert(
        node.id.clone(),
        NodeLocation {
            dimension,
            path: path.clone(),
        },
    );

    for (i, child) in node.children.iter().enumerate() {
        parents.insert(child.id.clone(), node.id.clone());
        path.push(i);
        index_node(child, dimension, path, locations, parents);
        path.pop();
    }
}

fn node_at_path<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get(*first)?;
    if rest.is_empty() {
        return Some(node);
    }
    node_at_path(&node.children, rest)
}
