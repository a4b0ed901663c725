//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod selection_repository;
pub mod tag_source;

pub use selection_repository::SelectionRepository;
pub use tag_source::TagSource;
