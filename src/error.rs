//! Error types for tagpick
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tagpick operations
pub type TagpickResult<T> = Result<T, TagpickError>;

/// Main error type for tagpick operations
#[derive(Error, Debug)]
pub enum TagpickError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag collection could not be parsed
    #[error("invalid tag file {file}: {message}")]
    TagFile { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Two tags share the same id
    #[error("duplicate tag id '{id}'")]
    DuplicateId { id: String },

    /// `lft` must be strictly less than `rgt`
    #[error("tag '{id}' has an empty interval (lft {lft} >= rgt {rgt})")]
    EmptyInterval { id: String, lft: i64, rgt: i64 },

    /// Two intervals partially overlap instead of nesting
    #[error("tags '{outer}' and '{inner}' have crossing intervals")]
    CrossingIntervals { outer: String, inner: String },

    /// Depth disagrees with the nesting implied by the intervals
    #[error("tag '{id}' has depth {actual}, expected {expected}")]
    DepthMismatch {
        id: String,
        expected: i64,
        actual: i64,
    },
}
