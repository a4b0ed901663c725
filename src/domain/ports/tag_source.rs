//! TagSource port - abstraction for loading the flat tag list
//!
//! The data-access collaborator (database query layer, JSON export, ...)
//! hands over every tag of every dimension as flat parent-pointer rows.

use crate::domain::entities::TagRecord;
use anyhow::Result;

/// Abstract source of tag records
///
/// Implemented by the infrastructure layer.
pub trait TagSource {
    /// Load every tag record, in any order
    fn load_tags(&self) -> Result<Vec<TagRecord>>;
}
