//! Domain Entities
//!
//! Core domain objects: flat tag records, tree nodes, the forest that owns
//! them, and the selection set.

mod forest;
mod selection;
mod tag;

pub use forest::{Forest, NodeLocation, PromotedOrphan};
pub use selection::SelectionSet;
pub use tag::{Node, TagRecord};
