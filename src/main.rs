//! tagtree CLI - pick tags from hierarchical taxonomies
//!
//! Usage: tagtree <COMMAND>
//!
//! Commands:
//!   tree    Show the tag forest with checkbox states
//!   toggle  Toggle tags on or off, in the order given
//!   chips   Print the selection as compact chips
//!   pick    Interactive tree selector
//!   check   Validate a tag list and report forest statistics

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use tagtree::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "error",
                "ok": false,
                "message": format!("{:#}", err),
            }));
        } else {
            let caps = ui::terminal::detect_capabilities();
            eprint!(
                "{}",
                ui::error::format_error(&err, caps.supports_color, caps.supports_unicode)
            );
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = commands::session::load_config(cli.config.as_deref())?;
    tagtree::logging::init(cli.verbose, config.output.verbosity);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    if !ui.json {
        ui::output::print_config_warnings(&warnings, ui.unicode);
    }

    tracing::debug!(
        orphans = %config.forest.orphans,
        strict_levels = config.forest.strict_levels,
        max_depth = config.forest.max_depth,
        "configuration loaded"
    );

    match cli.command {
        Commands::Tree {
            tags,
            selection,
            dimension,
        } => commands::tree::cmd_tree(&ui, &config, &tags, selection.as_deref(), dimension),
        Commands::Toggle {
            tags,
            selection,
            write,
            ids,
        } => commands::toggle::cmd_toggle(&ui, &config, &tags, selection.as_deref(), write, &ids),
        Commands::Chips { tags, selection } => {
            commands::chips::cmd_chips(&ui, &config, &tags, &selection)
        }
        Commands::Pick {
            tags,
            selection,
            write,
        } => commands::pick::cmd_pick(&ui, &config, &tags, selection.as_deref(), write),
        Commands::Check { tags } => commands::check::cmd_check(&ui, &config, &tags),
    }
}
