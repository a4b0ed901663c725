//! Domain Layer
//!
//! The taxonomy selection core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tag records, nodes, the forest, the selection set
//! - `value_objects/` - Dimension, tri-state, orphan policy
//! - `services/` - Forest builder, classifier, cascade, collapser
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
