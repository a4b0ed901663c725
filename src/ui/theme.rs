use crossterm::style::Color;

use tagtree::SelectionState;

/// Design tokens for the tagtree UI.
///
/// Only these semantic colors are used, and every icon comes from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Checkbox states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const POINTER: &str = "›";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const POINTER: &str = ">";
    pub const SEPARATOR: &str = "-";
}

/// Checkbox icon for a tri-state
pub fn state_icon(state: SelectionState, supports_unicode: bool) -> &'static str {
    match (supports_unicode, state) {
        (true, SelectionState::Checked) => icons::SELECTED,
        (true, SelectionState::Unchecked) => icons::UNSELECTED,
        (true, SelectionState::Indeterminate) => icons::PARTIAL,
        (false, SelectionState::Checked) => icons_ascii::SELECTED,
        (false, SelectionState::Unchecked) => icons_ascii::UNSELECTED,
        (false, SelectionState::Indeterminate) => icons_ascii::PARTIAL,
    }
}

/// Expansion marker for a node with children
pub fn expand_icon(expanded: bool, supports_unicode: bool) -> &'static str {
    match (supports_unicode, expanded) {
        (true, true) => icons::EXPAND,
        (true, false) => icons::COLLAPSE,
        (false, true) => icons_ascii::EXPAND,
        (false, false) => icons_ascii::COLLAPSE,
    }
}

/// Color used for a checkbox state
pub fn state_color(state: SelectionState) -> Color {
    match state {
        SelectionState::Checked => colors::SUCCESS,
        SelectionState::Indeterminate => colors::WARNING,
        SelectionState::Unchecked => colors::DIM,
    }
}
