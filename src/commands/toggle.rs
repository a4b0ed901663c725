use std::path::Path;

use anyhow::Result;
use serde_json::json;

use tagtree::config::Config;
use tagtree::{apply_toggles, collapse};

use super::session::{load_forest_file, load_selection_file, save_selection_file};
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

/// Apply toggles in argument order and print the resulting ids.
///
/// Nothing is written unless every id resolves.
pub fn cmd_toggle(
    ui: &UiContext,
    config: &Config,
    tags: &Path,
    selection_path: Option<&Path>,
    write: bool,
    ids: &[String],
) -> Result<()> {
    let forest = load_forest_file(config, tags)?;
    let current = load_selection_file(&forest, selection_path)?;

    let next = apply_toggles(&forest, ids, &current)?;
    let chips = collapse(&forest, &next)?;

    let written = match (write, selection_path) {
        (true, Some(path)) => {
            save_selection_file(path, &next)?;
            Some(path)
        }
        _ => None,
    };

    if ui.json {
        crate::ui::json::emit(json!({
            "event": "toggle",
            "toggled": ids,
            "selection": next.to_ids(),
            "chips": chips,
            "written": written.is_some(),
        }))?;
        return Ok(());
    }

    for id in next.iter() {
        println!("{}", id);
    }

    if let Some(path) = written {
        let icon = if ui.unicode { icons::SUCCESS } else { icons_ascii::SUCCESS };
        eprintln!(
            "{}",
            ColoredText::success(format!(
                "{} Saved {} ids to {}",
                icon,
                next.len(),
                path.display()
            ))
            .render(ui.color)
        );
    }
    Ok(())
}
