//! Error types for tagtree
//!
//! Uses `thiserror` for library errors. Every failure is reported at the
//! point of detection; nothing degrades into a plausible-looking selection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tagtree operations
pub type TagTreeResult<T> = Result<T, TagTreeError>;

/// Main error type for tagtree operations
#[derive(Error, Debug)]
pub enum TagTreeError {
    /// A toggle, classify or collapse request named an id absent from the forest
    #[error("unknown tag '{id}'")]
    UnknownNode { id: String },

    /// A record's parent id does not resolve (under the `reject` orphan policy)
    #[error("tag '{id}' references missing parent '{parent_id}'")]
    OrphanedNode { id: String, parent_id: String },

    /// Parent references form a loop
    #[error("tag '{id}' is part of a parent cycle")]
    CyclicReference { id: String },

    /// Two records share the same id
    #[error("duplicate tag id '{id}'")]
    DuplicateNode { id: String },

    /// A child lives in a different taxonomy dimension than its parent
    #[error("tag '{id}' and its parent '{parent_id}' belong to different dimensions")]
    DimensionMismatch { id: String, parent_id: String },

    /// Declared level disagrees with the tree position (strict levels only)
    #[error("tag '{id}' declares level {declared} but sits at level {expected}")]
    LevelMismatch {
        id: String,
        declared: u32,
        expected: u32,
    },

    /// A parent chain nests deeper than the configured limit
    #[error("tag '{id}' is nested deeper than the limit of {max_depth} levels")]
    TooDeep { id: String, max_depth: usize },

    /// Tag list could not be decoded
    #[error("invalid tag data in {file}: {message}")]
    InvalidTagData { file: PathBuf, message: String },

    /// Persisted selection could not be decoded
    #[error("invalid selection file {file}: {message}")]
    InvalidSelection { file: PathBuf, message: String },

    /// Configuration file could not be decoded
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TagTreeError {
    pub fn unknown(id: impl Into<String>) -> Self {
        TagTreeError::UnknownNode { id: id.into() }
    }
}
