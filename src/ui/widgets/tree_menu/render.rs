//! Terminal rendering functions for tree menu.

use crate::ui::theme::{self, icons, icons_ascii};

use super::menu::{FlattenedNode, RowKey};

/// Render a single tree row to a string
pub fn render_tree_node(node: &FlattenedNode, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(node.depth);
    let cursor = if is_active {
        if supports_unicode {
            format!("{} ", icons::POINTER)
        } else {
            format!("{} ", icons_ascii::POINTER)
        }
    } else {
        String::from("  ")
    };

    let state_icon = theme::state_icon(node.state, supports_unicode);

    // Expansion icon (only for rows with children)
    let expand_icon = if node.has_children {
        format!("{} ", theme::expand_icon(node.expanded, supports_unicode))
    } else {
        String::from("  ")
    };

    let mut suffix = String::new();
    if node.has_children {
        suffix.push_str(&format!(" ({} tags)", node.leaf_count));
    }
    if let Some(count) = node.article_count {
        suffix.push_str(&format!(" [{} articles]", count));
    }

    let label = match &node.key {
        RowKey::Dimension(dimension) => format!("{} ({})", node.label, dimension.as_str()),
        RowKey::Tag(_) => node.label.clone(),
    };

    format!(
        "{}{}{}{} {}{}",
        cursor, indent, expand_icon, state_icon, label, suffix
    )
}

/// Render the status bar with counts and the chip preview
pub fn render_status_bar(
    selected: usize,
    total: usize,
    chips: &str,
    supports_unicode: bool,
) -> String {
    let (selected_icon, partial_icon, unselected_icon) = if supports_unicode {
        (icons::SELECTED, icons::PARTIAL, icons::UNSELECTED)
    } else {
        (
            icons_ascii::SELECTED,
            icons_ascii::PARTIAL,
            icons_ascii::UNSELECTED,
        )
    };

    let chips = if chips.is_empty() { "(none)" } else { chips };

    format!(
        "Selected: {}/{} tags\nChips: {}\n\n{} = selected    {} = partial    {} = not selected",
        selected, total, chips, selected_icon, partial_icon, unselected_icon
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All    [n] None    [Enter] Confirm    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
    )
}
