use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};

use tagtree::config::Config;
use tagtree::domain::services::dimension_state;
use tagtree::{classify_forest, Forest, Node, StateMap, TaxonomyDimension};

use super::session::{load_forest_file, load_selection_file};
use crate::ui::context::UiContext;

pub fn cmd_tree(
    ui: &UiContext,
    config: &Config,
    tags: &Path,
    selection: Option<&Path>,
    dimension: Option<TaxonomyDimension>,
) -> Result<()> {
    let forest = load_forest_file(config, tags)?;
    let selection = load_selection_file(&forest, selection)?;

    if ui.json {
        let states = classify_forest(&forest, &selection);
        let dimensions: Vec<TaxonomyDimension> = match dimension {
            Some(d) => vec![d],
            None => forest.dimensions().map(|(d, _)| d).collect(),
        };
        let blocks: Vec<Value> = dimensions
            .into_iter()
            .map(|d| {
                json!({
                    "dimension": d,
                    "label": d.label(),
                    "state": dimension_state(&forest, d, &selection),
                    "roots": forest.roots(d).iter().map(|n| node_json(n, &states)).collect::<Vec<_>>(),
                })
            })
            .collect();

        crate::ui::json::emit(json!({
            "event": "tree",
            "selected": selection.len(),
            "total": forest.leaf_ids().len(),
            "dimensions": blocks,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::tree::render_forest(&forest, &selection, dimension, ui.color, ui.unicode)
    );
    print_orphans(ui, &forest);
    Ok(())
}

fn node_json(node: &Node, states: &StateMap) -> Value {
    let mut value = json!({
        "id": node.id,
        "name": node.name,
        "level": node.level,
        "state": states.get(&node.id),
        "children": node.children.iter().map(|c| node_json(c, states)).collect::<Vec<_>>(),
    });
    if let Some(count) = node.article_count {
        value["articleCount"] = json!(count);
    }
    if let Some(description) = &node.description {
        value["description"] = json!(description);
    }
    value
}

fn print_orphans(ui: &UiContext, forest: &Forest) {
    let orphans = forest.promoted_orphans();
    if !orphans.is_empty() {
        eprint!(
            "{}",
            crate::ui::output::render_promoted_orphans(orphans, ui.color, ui.unicode)
        );
    }
}
