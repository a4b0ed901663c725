//! Tri-state checkbox value derived for every node

use serde::{Deserialize, Serialize};

/// Selection state for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// Whole subtree selected (●)
    Checked,
    /// Nothing in the subtree selected (○)
    Unchecked,
    /// Some but not all of the subtree selected (◐)
    Indeterminate,
}

impl SelectionState {
    pub fn is_checked(&self) -> bool {
        matches!(self, SelectionState::Checked)
    }

    pub fn is_unchecked(&self) -> bool {
        matches!(self, SelectionState::Unchecked)
    }

    /// Fold child states into the parent's state.
    ///
    /// All checked gives checked, all unchecked gives unchecked, anything
    /// else (a mix, or any indeterminate child) gives indeterminate.
    /// An empty iterator counts as unchecked.
    pub fn from_children(states: impl IntoIterator<Item = SelectionState>) -> Self {
        let mut any_checked = false;
        let mut any_unchecked = false;

        for state in states {
            match state {
                SelectionState::Indeterminate => return SelectionState::Indeterminate,
                SelectionState::Checked => any_checked = true,
                SelectionState::Unchecked => any_unchecked = true,
            }
            if any_checked && any_unchecked {
                return SelectionState::Indeterminate;
            }
        }

        if any_checked {
            SelectionState::Checked
        } else {
            SelectionState::Unchecked
        }
    }
}

impl std::fmt::Display for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionState::Checked => write!(f, "checked"),
            SelectionState::Unchecked => write!(f, "unchecked"),
            SelectionState::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
