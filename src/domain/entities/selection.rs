//! Selection set entity
//!
//! The canonical, persisted state: a set of tag ids. Sets are values; the
//! cascade service returns a new set for every toggle instead of mutating
//! the caller's copy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of selected tag ids (order-irrelevant, no duplicates)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw ids without validating them against a forest.
    ///
    /// Prefer `services::expand` for persisted lists, which checks every id
    /// and normalizes internal ids to their leaves.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Flat id list for the persistence collaborator
    pub fn to_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub(crate) fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::from_ids(iter)
    }
}
