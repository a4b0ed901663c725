//! tagtree - hierarchical taxonomy selection engine
//!
//! Builds multi-root tag forests from flat parent-pointer records, derives
//! tri-state checkbox states, cascades toggles through subtrees and collapses
//! a selection into compact display chips.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Forest, Node, SelectionSet, TagRecord};
pub use domain::services::{
    apply_toggles, classify, classify_forest, classify_id, collapse, expand, minimal, toggle,
    Chip, ForestBuilder, StateMap,
};
pub use domain::value_objects::{OrphanPolicy, SelectionState, TaxonomyDimension};
pub use error::{TagTreeError, TagTreeResult};
