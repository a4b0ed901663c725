//! Tree Menu Widget
//!
//! Interactive checkbox tree over a tag forest. Dimension header rows sit
//! above each dimension's roots; toggling a row cascades through the
//! current selection, and every checkbox is re-derived after each action.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::TreeMenu;
