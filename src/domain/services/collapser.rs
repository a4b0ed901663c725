//! Display collapse and its inverse
//!
//! `collapse` reduces a selection to the smallest list of chips whose
//! expansion covers the same leaves: a node whose whole subtree is covered
//! shows as one chip, however deep that subtree goes. `expand` turns any id
//! list (leaf or internal) back into leaf form.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{Forest, Node, SelectionSet};
use crate::domain::value_objects::TaxonomyDimension;
use crate::error::{TagTreeError, TagTreeResult};

/// A compact display entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub id: String,
    pub name: String,
    pub dimension: TaxonomyDimension,
}

impl Chip {
    fn from_node(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            dimension: node.dimension,
        }
    }
}

/// Collapse a selection into display chips.
///
/// Internal ids in the input denote fully selected subtrees, so the output
/// of one collapse is valid input for the next. Chips come out dimension by
/// dimension in display order, each tree in pre-order.
pub fn collapse(forest: &Forest, selection: &SelectionSet) -> TagTreeResult<Vec<Chip>> {
    ensure_known(forest, selection.iter())?;

    let mut covered: HashSet<&str> = HashSet::new();
    for (_, roots) in forest.dimensions() {
        for root in roots {
            mark_covered(root, selection, &mut covered);
        }
    }

    let mut chips = Vec::new();
    for (_, roots) in forest.dimensions() {
        for root in roots {
            emit(root, &covered, &mut chips);
        }
    }
    Ok(chips)
}

/// The collapsed selection as a set of ids.
pub fn minimal(forest: &Forest, selection: &SelectionSet) -> TagTreeResult<SelectionSet> {
    Ok(collapse(forest, selection)?
        .into_iter()
        .map(|chip| chip.id)
        .collect())
}

/// Expand ids (leaf or internal) to the leaf-form selection they denote.
pub fn expand<I, S>(forest: &Forest, ids: I) -> TagTreeResult<SelectionSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = SelectionSet::new();
    for id in ids {
        for leaf in forest.get(id.as_ref())?.leaf_ids() {
            out.insert(leaf);
        }
    }
    Ok(out)
}

fn ensure_known<'a>(forest: &Forest, ids: impl Iterator<Item = &'a str>) -> TagTreeResult<()> {
    for id in ids {
        if !forest.contains(id) {
            return Err(TagTreeError::unknown(id));
        }
    }
    Ok(())
}

/// Post-order: a node is covered when listed itself, or when it has
/// children and all of them are covered.
fn mark_covered<'a>(
    node: &'a Node,
    selection: &SelectionSet,
    covered: &mut HashSet<&'a str>,
) -> bool {
    let mut all_children = !node.is_leaf();
    for child in &node.children {
        // No short-circuit: deeper nodes still need marking.
        all_children &= mark_covered(child, selection, covered);
    }

    let is_covered = selection.contains(&node.id) || all_children;
    if is_covered {
        covered.insert(node.id.as_str());
    }
    is_covered
}

fn emit(node: &Node, covered: &HashSet<&str>, chips: &mut Vec<Chip>) {
    if covered.contains(node.id.as_str()) {
        chips.push(Chip::from_node(node));
        return;
    }
    for child in &node.children {
        emit(child, covered, chips);
    }
}
