//! JSON Tag Source
//!
//! Reads the flat tag export produced by the data layer. Both a bare array
//! and a `{ "tags": [...] }` envelope are accepted.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::domain::entities::TagRecord;
use crate::domain::ports::TagSource;
use crate::error::TagTreeError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagFileDe {
    List(Vec<TagRecord>),
    Envelope { tags: Vec<TagRecord> },
}

/// Tag list stored as a JSON file
pub struct JsonTagFile {
    path: PathBuf,
}

impl JsonTagFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Decode tag records from JSON text
    pub fn parse(&self, content: &str) -> Result<Vec<TagRecord>, TagTreeError> {
        let decoded: TagFileDe =
            serde_json::from_str(content).map_err(|e| TagTreeError::InvalidTagData {
                file: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(match decoded {
            TagFileDe::List(tags) => tags,
            TagFileDe::Envelope { tags } => tags,
        })
    }
}

impl TagSource for JsonTagFile {
    fn load_tags(&self) -> Result<Vec<TagRecord>> {
        let content = fs::read_to_string(&self.path).map_err(TagTreeError::from)?;
        let tags = self.parse(&content)?;
        tracing::debug!(file = %self.path.display(), count = tags.len(), "loaded tag records");
        Ok(tags)
    }
}
