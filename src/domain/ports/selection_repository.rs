//! SelectionRepository port - persistence of the selected id list
//!
//! The consumer treats the list as a set; it becomes one join row per id
//! against the content record being edited.

use anyhow::Result;

/// Abstract store for a record's selected tag ids
pub trait SelectionRepository {
    /// Load the persisted ids (empty when nothing was saved yet)
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the persisted ids
    fn save(&self, ids: &[String]) -> Result<()>;
}
