//! Forest construction from flat parent-pointer records
//!
//! Two passes: index every record by id, then attach each record to its
//! parent's children (or its dimension's root list). Trees are assembled
//! top-down from the roots, so a node can only be placed once; anything
//! left over after assembly sits on a parent cycle. Assembly stops with
//! `TooDeep` once a chain exceeds the depth limit.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::entities::{Forest, Node, PromotedOrphan, TagRecord};
use crate::domain::value_objects::{OrphanPolicy, TaxonomyDimension};
use crate::error::{TagTreeError, TagTreeResult};

/// Deepest tree accepted unless overridden; real taxonomies stop at 3.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Builds a [`Forest`] from flat records.
#[derive(Debug, Clone)]
pub struct ForestBuilder {
    orphan_policy: OrphanPolicy,
    strict_levels: bool,
    max_depth: usize,
}

impl Default for ForestBuilder {
    fn default() -> Self {
        Self {
            orphan_policy: OrphanPolicy::default(),
            strict_levels: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    /// Fail instead of warning when a declared level disagrees with the tree.
    pub fn with_strict_levels(mut self, strict: bool) -> Self {
        self.strict_levels = strict;
        self
    }

    /// Reject trees nested deeper than `depth` levels (roots are depth 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn orphan_policy(&self) -> OrphanPolicy {
        self.orphan_policy
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn build(&self, records: impl IntoIterator<Item = TagRecord>) -> TagTreeResult<Forest> {
        // Pass 1: id -> node with an empty child list, remembering input order.
        let mut nodes: HashMap<String, Node> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for record in records {
            if nodes.contains_key(&record.id) {
                return Err(TagTreeError::DuplicateNode { id: record.id });
            }
            order.push(record.id.clone());
            nodes.insert(record.id.clone(), Node::from(record));
        }

        // Pass 2: decide where every node hangs.
        let mut root_ids: BTreeMap<TaxonomyDimension, Vec<String>> = BTreeMap::new();
        let mut children_of: HashMap<String, Vec<String>> = HashMap::new();
        let mut promoted: Vec<PromotedOrphan> = Vec::new();

        for id in &order {
            let node = &nodes[id];
            match node.parent_id.as_deref() {
                None => root_ids.entry(node.dimension).or_default().push(id.clone()),
                Some(parent_id) => match nodes.get(parent_id) {
                    Some(parent) if parent.dimension != node.dimension => {
                        return Err(TagTreeError::DimensionMismatch {
                            id: id.clone(),
                            parent_id: parent_id.to_string(),
                        });
                    }
                    Some(_) => children_of
                        .entry(parent_id.to_string())
                        .or_default()
                        .push(id.clone()),
                    None => match self.orphan_policy {
                        OrphanPolicy::Reject => {
                            return Err(TagTreeError::OrphanedNode {
                                id: id.clone(),
                                parent_id: parent_id.to_string(),
                            });
                        }
                        OrphanPolicy::Promote => {
                            tracing::warn!(
                                tag = %id,
                                missing_parent = %parent_id,
                                "promoting orphaned tag to a root"
                            );
                            promoted.push(PromotedOrphan {
                                id: id.clone(),
                                missing_parent_id: parent_id.to_string(),
                            });
                            root_ids.entry(node.dimension).or_default().push(id.clone());
                        }
                    },
                },
            }
        }

        // Promoted orphans become real roots: no parent, declared level kept.
        for orphan in &promoted {
            if let Some(node) = nodes.get_mut(&orphan.id) {
                node.parent_id = None;
            }
        }

        let promoted_ids: HashSet<&str> = promoted.iter().map(|p| p.id.as_str()).collect();
        let mut roots: BTreeMap<TaxonomyDimension, Vec<Node>> = BTreeMap::new();
        for (dimension, ids) in root_ids {
            let mut assembled = Vec::with_capacity(ids.len());
            for id in ids {
                let expected = if promoted_ids.contains(id.as_str()) { None } else { Some(1) };
                assembled.push(self.assemble(&id, 1, expected, &mut nodes, &children_of)?);
            }
            sort_siblings(&mut assembled);
            roots.insert(dimension, assembled);
        }

        // Whatever was not reached from a root hangs off a cycle.
        if let Some(id) = order.iter().find(|id| nodes.contains_key(id.as_str())) {
            return Err(TagTreeError::CyclicReference { id: id.clone() });
        }

        let forest = Forest::from_roots(roots, promoted);
        tracing::debug!(
            nodes = forest.len(),
            dimensions = forest.dimensions().count(),
            promoted = forest.promoted_orphans().len(),
            "built taxonomy forest"
        );
        Ok(forest)
    }

    /// Move `id` out of the pending map and attach its subtree.
    ///
    /// Recursion is bounded by `max_depth`, so every tree handed to
    /// [`Forest`] is shallow enough for the recursive walks over it.
    fn assemble(
        &self,
        id: &str,
        depth: usize,
        expected_level: Option<u32>,
        nodes: &mut HashMap<String, Node>,
        children_of: &HashMap<String, Vec<String>>,
    ) -> TagTreeResult<Node> {
        if depth > self.max_depth {
            return Err(TagTreeError::TooDeep {
                id: id.to_string(),
                max_depth: self.max_depth,
            });
        }

        let mut node = nodes
            .remove(id)
            .ok_or_else(|| TagTreeError::CyclicReference { id: id.to_string() })?;

        if let Some(expected) = expected_level {
            self.check_level(&node, expected)?;
        }

        if let Some(child_ids) = children_of.get(id) {
            for child_id in child_ids {
                let child = self.assemble(
                    child_id,
                    depth + 1,
                    Some(node.level + 1),
                    nodes,
                    children_of,
                )?;
                node.children.push(child);
            }
            sort_siblings(&mut node.children);
        }

        Ok(node)
    }

    fn check_level(&self, node: &Node, expected: u32) -> TagTreeResult<()> {
        if node.level == expected {
            return Ok(());
        }
        if self.strict_levels {
            return Err(TagTreeError::LevelMismatch {
                id: node.id.clone(),
                declared: node.level,
                expected,
            });
        }
        tracing::warn!(
            tag = %node.id,
            declared = node.level,
            expected,
            "tag level disagrees with its tree position"
        );
        Ok(())
    }
}

/// Stable sort: equal sort keys keep input order.
fn sort_siblings(nodes: &mut [Node]) {
    nodes.sort_by_key(|n| n.sort_order);
}
