//! Presentation Layer
//!
//! Command-line argument model. Rendering and command handlers live in the
//! binary (`commands`, `ui`); this layer only describes what can be asked.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
