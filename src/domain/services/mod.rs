//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod cascade;
mod classifier;
mod collapser;
mod forest_builder;

pub use cascade::{apply_toggles, select_all, toggle, toggle_dimension};
pub use classifier::{classify, classify_forest, classify_id, dimension_state, StateMap};
pub use collapser::{collapse, expand, minimal, Chip};
pub use forest_builder::{ForestBuilder, DEFAULT_MAX_DEPTH};
