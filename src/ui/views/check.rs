use serde::Serialize;

use tagtree::{Forest, TaxonomyDimension};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

/// Node and leaf totals for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionStats {
    pub dimension: TaxonomyDimension,
    pub label: &'static str,
    pub roots: usize,
    pub nodes: usize,
    pub leaves: usize,
}

/// Stats for all five dimensions, empty ones included.
pub fn dimension_stats(forest: &Forest) -> Vec<DimensionStats> {
    TaxonomyDimension::ALL
        .into_iter()
        .map(|dimension| {
            let roots = forest.roots(dimension);
            DimensionStats {
                dimension,
                label: dimension.label(),
                roots: roots.len(),
                nodes: roots.iter().map(|r| r.node_count()).sum(),
                leaves: roots.iter().map(|r| r.leaf_count()).sum(),
            }
        })
        .collect()
}

pub fn render_check_report(
    stats: &[DimensionStats],
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for s in stats {
        let mut line = format!(
            "  {} ({}): {} tags, {} leaves",
            s.label,
            s.dimension.as_str(),
            s.nodes,
            s.leaves
        );
        if verbose {
            line.push_str(&format!(", {} roots", s.roots));
        }
        if s.nodes == 0 {
            out.push_str(&ColoredText::dim(line).render(supports_color));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    let total: usize = stats.iter().map(|s| s.nodes).sum();
    let used = stats.iter().filter(|s| s.nodes > 0).count();
    let icon = if supports_unicode { icons::SUCCESS } else { icons_ascii::SUCCESS };
    out.push_str(
        &ColoredText::success(format!(
            "{} {} tags in {} dimensions",
            icon, total, used
        ))
        .render(supports_color),
    );
    out.push('\n');
    out
}
