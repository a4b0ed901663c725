//! Static rendering of the whole forest for `tagtree tree`.
//!
//! Ids line up in one column. Labels are mostly CJK, so widths are measured
//! with `unicode-width`, not byte or char counts.

use unicode_width::UnicodeWidthStr;

use tagtree::domain::services::dimension_state;
use tagtree::{
    classify_forest, Forest, Node, SelectionSet, SelectionState, StateMap, TaxonomyDimension,
};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

struct Row {
    depth: usize,
    icon: &'static str,
    state: SelectionState,
    name: String,
    id: String,
    notes: Vec<String>,
}

impl Row {
    fn left_plain(&self) -> String {
        format!("{}{} {}", "  ".repeat(self.depth), self.icon, self.name)
    }
}

/// Render every dimension (or just `only`) with checkbox states.
pub fn render_forest(
    forest: &Forest,
    selection: &SelectionSet,
    only: Option<TaxonomyDimension>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let states = classify_forest(forest, selection);

    let dimensions: Vec<TaxonomyDimension> = match only {
        Some(dimension) => vec![dimension],
        None => forest.dimensions().map(|(d, _)| d).collect(),
    };

    if dimensions.is_empty() {
        return "No tags\n".to_string();
    }

    let blocks: Vec<(TaxonomyDimension, Vec<Row>)> = dimensions
        .iter()
        .map(|&dimension| {
            let mut rows = Vec::new();
            for root in forest.roots(dimension) {
                collect_rows(root, 1, &states, supports_unicode, &mut rows);
            }
            (dimension, rows)
        })
        .collect();

    let column = blocks
        .iter()
        .flat_map(|(_, rows)| rows.iter())
        .map(|row| row.left_plain().width())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    for (i, (dimension, rows)) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let state = dimension_state(forest, *dimension, selection);
        let icon = theme::state_icon(state, supports_unicode);
        out.push_str(&format!(
            "{} {}\n",
            ColoredText::for_state(icon, state).render(supports_color),
            ColoredText::info(format!("{} ({})", dimension.label(), dimension.as_str()))
                .bold()
                .render(supports_color)
        ));

        if rows.is_empty() {
            out.push_str("  (no tags)\n");
        }

        for row in rows {
            let pad = column.saturating_sub(row.left_plain().width());
            let mut line = format!(
                "{}{} {}{}{}",
                "  ".repeat(row.depth),
                ColoredText::for_state(row.icon, row.state).render(supports_color),
                row.name,
                " ".repeat(pad),
                ColoredText::dim(row.id.as_str()).render(supports_color)
            );
            if !row.notes.is_empty() {
                line.push_str("  ");
                line.push_str(&row.notes.join(", "));
            }
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

fn collect_rows(
    node: &Node,
    depth: usize,
    states: &StateMap,
    supports_unicode: bool,
    rows: &mut Vec<Row>,
) {
    let state = states
        .get(&node.id)
        .unwrap_or(SelectionState::Unchecked);

    let mut notes = Vec::new();
    if !node.is_leaf() {
        notes.push(match node.leaf_count() {
            1 => "1 leaf".to_string(),
            n => format!("{} leaves", n),
        });
    }
    if let Some(count) = node.article_count {
        notes.push(format!("{} articles", count));
    }

    rows.push(Row {
        depth,
        icon: theme::state_icon(state, supports_unicode),
        state,
        name: node.name.clone(),
        id: node.id.clone(),
        notes,
    });

    for child in &node.children {
        collect_rows(child, depth + 1, states, supports_unicode, rows);
    }
}
