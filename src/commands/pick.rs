use std::path::Path;

use anyhow::{bail, Result};
use serde_json::json;

use tagtree::collapse;
use tagtree::config::Config;

use super::session::{load_forest_file, load_selection_file, save_selection_file};
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::tree_menu::{run_interactive, TreeMenu};

pub fn cmd_pick(
    ui: &UiContext,
    config: &Config,
    tags: &Path,
    selection_path: Option<&Path>,
    write: bool,
) -> Result<()> {
    let forest = load_forest_file(config, tags)?;
    let current = load_selection_file(&forest, selection_path)?;

    if !crate::ui::terminal::is_interactive() {
        bail!("`tagtree pick` needs an interactive terminal; use `tagtree toggle` in scripts");
    }

    let mut menu = TreeMenu::new(&forest, current);
    let Some(selection) = run_interactive(&mut menu, ui.unicode, ui.caps.width)? else {
        if ui.json {
            crate::ui::json::emit(json!({ "event": "pick", "confirmed": false }))?;
        } else {
            println!("{}", ColoredText::dim("Selection unchanged").render(ui.color));
        }
        return Ok(());
    };

    let chips = collapse(&forest, &selection)?;
    let written = write && selection_path.is_some();
    if let (true, Some(path)) = (write, selection_path) {
        save_selection_file(path, &selection)?;
    }

    if ui.json {
        crate::ui::json::emit(json!({
            "event": "pick",
            "confirmed": true,
            "selection": selection.to_ids(),
            "chips": chips,
            "written": written,
        }))?;
        return Ok(());
    }

    print!("{}", crate::ui::views::chips::render_chips(&chips, ui.color));
    if let (true, Some(path)) = (written, selection_path) {
        println!(
            "{}",
            ColoredText::success(format!("Saved {} ids to {}", selection.len(), path.display()))
                .render(ui.color)
        );
    }
    Ok(())
}
