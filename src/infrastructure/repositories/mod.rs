//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_selection;
mod json_tags;
mod memory;

pub use json_selection::JsonSelectionFile;
pub use json_tags::JsonTagFile;
pub use memory::{InMemorySelection, InMemoryTags};
