//! Tri-state classification
//!
//! Leaves are checked iff their id is in the selection. Internal nodes are
//! derived from their children only; an internal id sitting in the set is
//! never consulted, so a node can't read as checked while a descendant is
//! unselected.

use std::collections::HashMap;

use crate::domain::entities::{Forest, Node, SelectionSet};
use crate::domain::value_objects::{SelectionState, TaxonomyDimension};
use crate::error::TagTreeResult;

/// Classify a single node against a selection.
pub fn classify(node: &Node, selection: &SelectionSet) -> SelectionState {
    if node.is_leaf() {
        return leaf_state(node, selection);
    }
    SelectionState::from_children(node.children.iter().map(|c| classify(c, selection)))
}

/// Classify a node by id, failing with `UnknownNode` if it is not in the forest.
pub fn classify_id(
    forest: &Forest,
    id: &str,
    selection: &SelectionSet,
) -> TagTreeResult<SelectionState> {
    Ok(classify(forest.get(id)?, selection))
}

/// Aggregate state of a whole dimension, folding its root states.
pub fn dimension_state(
    forest: &Forest,
    dimension: TaxonomyDimension,
    selection: &SelectionSet,
) -> SelectionState {
    SelectionState::from_children(
        forest
            .roots(dimension)
            .iter()
            .map(|r| classify(r, selection)),
    )
}

/// States for every node of a forest, computed in one bottom-up pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMap {
    states: HashMap<String, SelectionState>,
}

impl StateMap {
    pub fn get(&self, id: &str) -> Option<SelectionState> {
        self.states.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Ids currently in the given state
    pub fn ids_in(&self, state: SelectionState) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .states
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Classify every node of the forest at once.
pub fn classify_forest(forest: &Forest, selection: &SelectionSet) -> StateMap {
    let mut map = StateMap {
        states: HashMap::with_capacity(forest.len()),
    };
    for (_, roots) in forest.dimensions() {
        for root in roots {
            fill(root, selection, &mut map.states);
        }
    }
    map
}

fn fill(
    node: &Node,
    selection: &SelectionSet,
    states: &mut HashMap<String, SelectionState>,
) -> SelectionState {
    let state = if node.is_leaf() {
        leaf_state(node, selection)
    } else {
        // Every child must be visited, so collect before folding.
        let child_states: Vec<SelectionState> = node
            .children
            .iter()
            .map(|c| fill(c, selection, states))
            .collect();
        SelectionState::from_children(child_states)
    };
    states.insert(node.id.clone(), state);
    state
}

fn leaf_state(node: &Node, selection: &SelectionSet) -> SelectionState {
    if selection.contains(&node.id) {
        SelectionState::Checked
    } else {
        SelectionState::Unchecked
    }
}
