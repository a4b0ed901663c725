//! What the forest builder does with records whose parent is missing

use serde::{Deserialize, Serialize};

/// Orphan handling policy.
///
/// Dropping an orphan is not an option: the node would vanish from the
/// forest and any persisted selection of it would be lost without trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Re-parent the orphan as a root of its own dimension
    #[default]
    Promote,
    /// Fail the whole build with `OrphanedNode`
    Reject,
}

impl std::fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrphanPolicy::Promote => write!(f, "promote"),
            OrphanPolicy::Reject => write!(f, "reject"),
        }
    }
}
