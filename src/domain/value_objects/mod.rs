//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod dimension;
mod orphan_policy;
mod selection_state;

pub use dimension::TaxonomyDimension;
pub use orphan_policy::OrphanPolicy;
pub use selection_state::SelectionState;
