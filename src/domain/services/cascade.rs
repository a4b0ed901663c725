//! Cascading toggles
//!
//! The selection is kept in leaf form: toggling a node on writes the ids of
//! every leaf under it, toggling it off removes the node and everything
//! below it. A toggle never mutates its input; it returns the next set.

use crate::domain::entities::{Forest, SelectionSet};
use crate::domain::value_objects::{SelectionState, TaxonomyDimension};
use crate::error::TagTreeResult;

use super::classifier::{classify, dimension_state};

/// Toggle one node.
///
/// A checked node is cleared with its whole subtree. An unchecked or
/// indeterminate node is completed: every leaf below it becomes selected.
pub fn toggle(forest: &Forest, id: &str, selection: &SelectionSet) -> TagTreeResult<SelectionSet> {
    let node = forest.get(id)?;
    let state = classify(node, selection);
    let mut next = selection.clone();

    match state {
        SelectionState::Checked => {
            next.remove(&node.id);
            for descendant in node.descendant_ids() {
                next.remove(descendant);
            }
        }
        SelectionState::Unchecked | SelectionState::Indeterminate => {
            for leaf in node.leaf_ids() {
                next.insert(leaf);
            }
        }
    }

    tracing::debug!(
        tag = %id,
        from = %state,
        selected = next.len(),
        "toggled tag"
    );
    Ok(next)
}

/// Apply toggles in order. Fails on the first unknown id; no partial result
/// escapes.
pub fn apply_toggles<I, S>(
    forest: &Forest,
    ids: I,
    selection: &SelectionSet,
) -> TagTreeResult<SelectionSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut current = selection.clone();
    for id in ids {
        current = toggle(forest, id.as_ref(), &current)?;
    }
    Ok(current)
}

/// Toggle a whole dimension as if it were the parent of its roots.
pub fn toggle_dimension(
    forest: &Forest,
    dimension: TaxonomyDimension,
    selection: &SelectionSet,
) -> SelectionSet {
    let mut next = selection.clone();
    match dimension_state(forest, dimension, selection) {
        SelectionState::Checked => {
            for node in forest.roots(dimension) {
                next.remove(&node.id);
                for descendant in node.descendant_ids() {
                    next.remove(descendant);
                }
            }
        }
        SelectionState::Unchecked | SelectionState::Indeterminate => {
            for leaf in forest.dimension_leaf_ids(dimension) {
                next.insert(leaf);
            }
        }
    }
    next
}

/// Every leaf of the forest selected.
pub fn select_all(forest: &Forest) -> SelectionSet {
    SelectionSet::from_ids(forest.leaf_ids())
}
