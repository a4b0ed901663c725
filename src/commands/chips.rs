use std::path::Path;

use anyhow::Result;
use serde_json::json;

use tagtree::collapse;
use tagtree::config::Config;

use super::session::{load_forest_file, load_selection_file};
use crate::ui::context::UiContext;

pub fn cmd_chips(ui: &UiContext, config: &Config, tags: &Path, selection: &Path) -> Result<()> {
    let forest = load_forest_file(config, tags)?;
    let selection = load_selection_file(&forest, Some(selection))?;
    let chips = collapse(&forest, &selection)?;

    if ui.json {
        crate::ui::json::emit(json!({
            "event": "chips",
            "chips": chips,
        }))?;
        return Ok(());
    }

    print!("{}", crate::ui::views::chips::render_chips(&chips, ui.color));
    Ok(())
}
