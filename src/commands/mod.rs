//! Command handlers for the tagtree binary.
//!
//! Each handler loads what it needs through the domain ports, runs the pure
//! domain services, and renders either text or one JSON object.

pub mod check;
pub mod chips;
pub mod pick;
pub mod session;
pub mod toggle;
pub mod tree;
