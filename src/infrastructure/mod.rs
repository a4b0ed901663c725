//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Tag sources and selection stores (JSON files, in-memory)

pub mod repositories;

// Re-export for convenience
pub use repositories::{InMemorySelection, InMemoryTags, JsonSelectionFile, JsonTagFile};
