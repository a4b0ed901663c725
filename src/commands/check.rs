use std::path::Path;

use anyhow::Result;
use serde_json::json;

use tagtree::config::Config;

use super::session::load_forest_file;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::check::{dimension_stats, render_check_report};

/// Build the forest and report its shape. Build errors propagate to the
/// caller, which prints them and exits non-zero.
pub fn cmd_check(ui: &UiContext, config: &Config, tags: &Path) -> Result<()> {
    let forest = load_forest_file(config, tags)?;
    let stats = dimension_stats(&forest);

    if ui.json {
        crate::ui::json::emit(json!({
            "event": "check",
            "ok": true,
            "total": forest.len(),
            "orphanPolicy": config.forest.orphans,
            "dimensions": stats,
            "promotedOrphans": forest.promoted_orphans(),
        }))?;
        return Ok(());
    }

    println!(
        "{}",
        ColoredText::info(format!("Checking {}", tags.display()))
            .bold()
            .render(ui.color)
    );
    print!("{}", render_check_report(&stats, ui.verbose > 0, ui.color, ui.unicode));
    print!(
        "{}",
        crate::ui::output::render_promoted_orphans(forest.promoted_orphans(), ui.color, ui.unicode)
    );
    Ok(())
}
