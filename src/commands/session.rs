//! Shared loading and saving for commands.

use std::path::Path;

use anyhow::{Context, Result};

use tagtree::config::{Config, ConfigWarning, PROJECT_CONFIG_FILE};
use tagtree::domain::ports::{SelectionRepository, TagSource};
use tagtree::infrastructure::{JsonSelectionFile, JsonTagFile};
use tagtree::{expand, Forest, SelectionSet};

/// Resolve configuration: explicit `--config`, else `./tagtree.toml`, the
/// user config, or defaults. Environment overrides apply last.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    let cwd = std::env::current_dir()?;
    let project = cwd.join(PROJECT_CONFIG_FILE);

    let path = match explicit {
        Some(path) => path,
        None if project.exists() => project.as_path(),
        None => return Ok((Config::load_or_default(None), Vec::new())),
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    Ok((config.with_env_overrides(), warnings))
}

/// Build the forest from a tag source with the configured builder.
pub fn load_forest(config: &Config, source: &dyn TagSource) -> Result<Forest> {
    let records = source.load_tags()?;
    let forest = config.forest_builder().build(records)?;
    Ok(forest)
}

/// Build the forest from a JSON tag file.
pub fn load_forest_file(config: &Config, tags: &Path) -> Result<Forest> {
    load_forest(config, &JsonTagFile::new(tags))
        .with_context(|| format!("building forest from {}", tags.display()))
}

/// Load a persisted id list and normalize it to leaf form.
pub fn load_selection(forest: &Forest, repo: &dyn SelectionRepository) -> Result<SelectionSet> {
    let ids = repo.load()?;
    Ok(expand(forest, &ids)?)
}

/// Selection from an optional JSON file; no file means nothing selected.
pub fn load_selection_file(forest: &Forest, path: Option<&Path>) -> Result<SelectionSet> {
    match path {
        None => Ok(SelectionSet::new()),
        Some(path) => load_selection(forest, &JsonSelectionFile::new(path))
            .with_context(|| format!("loading selection from {}", path.display())),
    }
}

/// Persist the selection in leaf form.
pub fn save_selection(repo: &dyn SelectionRepository, selection: &SelectionSet) -> Result<()> {
    repo.save(&selection.to_ids())
}

pub fn save_selection_file(path: &Path, selection: &SelectionSet) -> Result<()> {
    save_selection(&JsonSelectionFile::new(path), selection)
        .with_context(|| format!("saving selection to {}", path.display()))
}
