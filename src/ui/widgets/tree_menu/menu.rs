//! TreeMenu state management and action handling.

use std::collections::HashSet;

use tagtree::domain::services::{dimension_state, select_all, toggle_dimension};
use tagtree::{
    classify_forest, collapse, toggle, Chip, Forest, Node, SelectionSet, SelectionState,
    StateMap, TaxonomyDimension,
};

use super::render::{render_help_bar, render_status_bar, render_tree_node};
use crate::ui::views::chips::chip_line;

/// What a visible row stands for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Dimension(TaxonomyDimension),
    Tag(String),
}

/// A flattened representation of a tree row for rendering
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    pub key: RowKey,
    /// Depth level (0 = dimension header)
    pub depth: usize,
    pub label: String,
    pub state: SelectionState,
    /// Whether this row is expanded (for non-leaves)
    pub expanded: bool,
    pub has_children: bool,
    /// Leaves below this row
    pub leaf_count: usize,
    pub article_count: Option<u32>,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle the row under the cursor
    Toggle,
    /// Expand row
    Expand,
    /// Collapse row
    Collapse,
    /// Select every tag
    SelectAll,
    /// Clear the selection
    SelectNone,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree menu for selecting tags
pub struct TreeMenu<'a> {
    forest: &'a Forest,
    selection: SelectionSet,
    expanded: HashSet<RowKey>,
    /// Current cursor position in flattened view
    pub cursor: usize,
    flattened: Vec<FlattenedNode>,
}

impl<'a> TreeMenu<'a> {
    /// Dimensions start expanded, and so does every partially selected node,
    /// so an existing selection is visible on open.
    pub fn new(forest: &'a Forest, selection: SelectionSet) -> Self {
        let states = classify_forest(forest, &selection);
        let mut expanded: HashSet<RowKey> = forest
            .dimensions()
            .map(|(d, _)| RowKey::Dimension(d))
            .collect();
        expanded.extend(
            states
                .ids_in(SelectionState::Indeterminate)
                .into_iter()
                .map(|id| RowKey::Tag(id.to_string())),
        );

        let mut menu = Self {
            forest,
            selection,
            expanded,
            cursor: 0,
            flattened: Vec::new(),
        };
        menu.rebuild_flattened();
        menu
    }

    /// Rebuild the flattened row list
    pub fn rebuild_flattened(&mut self) {
        let states = classify_forest(self.forest, &self.selection);
        let mut rows = Vec::new();

        for (dimension, roots) in self.forest.dimensions() {
            let key = RowKey::Dimension(dimension);
            let expanded = self.expanded.contains(&key);
            rows.push(FlattenedNode {
                key,
                depth: 0,
                label: dimension.label().to_string(),
                state: dimension_state(self.forest, dimension, &self.selection),
                expanded,
                has_children: true,
                leaf_count: roots.iter().map(|r| r.leaf_count()).sum(),
                article_count: None,
            });

            if expanded {
                for root in roots {
                    self.flatten_node(root, 1, &states, &mut rows);
                }
            }
        }

        self.flattened = rows;
        // Ensure cursor is within bounds
        if !self.flattened.is_empty() && self.cursor >= self.flattened.len() {
            self.cursor = self.flattened.len() - 1;
        }
    }

    fn flatten_node(
        &self,
        node: &Node,
        depth: usize,
        states: &StateMap,
        rows: &mut Vec<FlattenedNode>,
    ) {
        let key = RowKey::Tag(node.id.clone());
        let expanded = !node.is_leaf() && self.expanded.contains(&key);

        rows.push(FlattenedNode {
            key,
            depth,
            label: node.name.clone(),
            state: states.get(&node.id).unwrap_or(SelectionState::Unchecked),
            expanded,
            has_children: !node.is_leaf(),
            leaf_count: node.leaf_count(),
            article_count: node.article_count,
        });

        if expanded {
            for child in &node.children {
                self.flatten_node(child, depth + 1, states, rows);
            }
        }
    }

    /// Get flattened rows for rendering
    pub fn flattened_nodes(&self) -> &[FlattenedNode] {
        &self.flattened
    }

    /// Handle a tree action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.flattened.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some(key) = self.current_key() {
                    self.toggle_row(&key);
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Expand => {
                if let Some(row) = self.flattened.get(self.cursor) {
                    if row.has_children {
                        let key = row.key.clone();
                        self.expanded.insert(key);
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Collapse => {
                if let Some(key) = self.current_key() {
                    self.expanded.remove(&key);
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectAll => {
                self.selection = select_all(self.forest);
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectNone => {
                self.selection = SelectionSet::new();
                self.rebuild_flattened();
                false
            }
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    fn current_key(&self) -> Option<RowKey> {
        self.flattened.get(self.cursor).map(|row| row.key.clone())
    }

    fn toggle_row(&mut self, key: &RowKey) {
        match key {
            RowKey::Dimension(dimension) => {
                self.selection = toggle_dimension(self.forest, *dimension, &self.selection);
            }
            RowKey::Tag(id) => match toggle(self.forest, id, &self.selection) {
                Ok(next) => self.selection = next,
                Err(e) => tracing::warn!(error = %e, "toggle ignored"),
            },
        }
    }

    /// The current selection
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected leaf count
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Leaf count of the whole forest
    pub fn total_count(&self) -> usize {
        self.forest.leaf_ids().len()
    }

    /// Collapsed chips for the current selection
    pub fn chips(&self) -> Vec<Chip> {
        collapse(self.forest, &self.selection).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "chip preview unavailable");
            Vec::new()
        })
    }

    /// Render the tree menu to a string
    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        for (i, node) in self.flattened_nodes().iter().enumerate() {
            let is_active = i == self.cursor;
            out.push_str(&render_tree_node(node, is_active, supports_unicode));
            out.push('\n');
        }

        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self, supports_unicode: bool) -> String {
        render_status_bar(
            self.selected_count(),
            self.total_count(),
            &chip_line(&self.chips()),
            supports_unicode,
        )
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}
