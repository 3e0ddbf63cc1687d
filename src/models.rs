//! Tag records and tag-collection loading
//!
//! A tag collection is a JSON array of nested-set records:
//!
//! ```json
//! [
//!   { "id": "root", "name": "Root", "lft": 1, "rgt": 6, "depth": 0 },
//!   { "id": "a", "name": "A", "lft": 2, "rgt": 3, "depth": 1 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TagpickError, TagpickResult};

/// A tag in a nested-set taxonomy.
///
/// `a` is an ancestor of `b` iff `a.lft < b.lft && b.rgt < a.rgt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub lft: i64,
    pub rgt: i64,
    pub depth: i64,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lft: i64, rgt: i64, depth: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lft,
            rgt,
            depth,
        }
    }

    /// True if `other` lies inside this tag's interval, the tag itself included.
    pub fn contains(&self, other: &Tag) -> bool {
        self.lft <= other.lft && other.rgt <= self.rgt
    }

    /// True if this tag is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &Tag) -> bool {
        self.lft < other.lft && other.rgt < self.rgt
    }

    /// Case-insensitive substring match against the tag name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// Parse a JSON tag collection.
pub fn parse_tags(content: &str) -> Result<Vec<Tag>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load a JSON tag collection from disk.
pub fn load_tags(path: &Path) -> TagpickResult<Vec<Tag>> {
    let content = fs::read_to_string(path)?;
    let tags = parse_tags(&content).map_err(|e| TagpickError::TagFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), count = tags.len(), "loaded tag collection");
    Ok(tags)
}
