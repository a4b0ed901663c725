//! In-memory adapters
//!
//! Used by tests and by callers that already hold the tag list.

use std::sync::Mutex;

use anyhow::Result;

use crate::domain::entities::TagRecord;
use crate::domain::ports::{SelectionRepository, TagSource};

/// Tag source backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryTags {
    records: Vec<TagRecord>,
}

impl InMemoryTags {
    pub fn new(records: Vec<TagRecord>) -> Self {
        Self { records }
    }
}

impl TagSource for InMemoryTags {
    fn load_tags(&self) -> Result<Vec<TagRecord>> {
        Ok(self.records.clone())
    }
}

/// Selection store backed by a mutex-guarded vector
#[derive(Debug, Default)]
pub struct InMemorySelection {
    ids: Mutex<Vec<String>>,
}

impl InMemorySelection {
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids: Mutex::new(ids),
        }
    }
}

impl SelectionRepository for InMemorySelection {
    fn load(&self) -> Result<Vec<String>> {
        let ids = self
            .ids
            .lock()
            .map_err(|_| anyhow::anyhow!("selection store poisoned"))?;
        Ok(ids.clone())
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        let mut stored = self
            .ids
            .lock()
            .map_err(|_| anyhow::anyhow!("selection store poisoned"))?;
        *stored = ids.to_vec();
        Ok(())
    }
}
