//! JSON Selection File
//!
//! Persists the selected id list as a JSON array. A missing file is an empty
//! selection. Writes go through a temp file in the same directory and are
//! renamed into place.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::domain::ports::SelectionRepository;
use crate::error::TagTreeError;

/// Selection stored as a JSON array of ids
pub struct JsonSelectionFile {
    path: PathBuf,
}

impl JsonSelectionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SelectionRepository for JsonSelectionFile {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(TagTreeError::from)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> =
            serde_json::from_str(&content).map_err(|e| TagTreeError::InvalidSelection {
                file: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(ids)
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        let mut sorted = ids.to_vec();
        sorted.sort();
        sorted.dedup();

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(TagTreeError::from)?;

        let mut content = serde_json::to_string_pretty(&sorted).map_err(TagTreeError::from)?;
        content.push('\n');

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(TagTreeError::from)?;
        tmp.write_all(content.as_bytes())
            .map_err(TagTreeError::from)?;
        tmp.persist(&self.path)
            .map_err(|e| TagTreeError::from(e.error))?;

        tracing::debug!(file = %self.path.display(), count = sorted.len(), "saved selection");
        Ok(())
    }
}
