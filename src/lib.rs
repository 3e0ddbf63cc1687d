//! tagpick - nested-set tag tree selector
//!
//! Rebuilds a tag hierarchy from flat `(lft, rgt, depth)` records and tracks
//! a user's tag selection and search query over it. Two views are derived:
//! the minimal covering selection (fully selected sibling groups collapse
//! into their parent) and the query-filtered list of tags to offer, expanded
//! to include ancestors of every match.

pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod selector;
pub mod tree;

// Re-exports for convenience
pub use config::Config;
pub use error::{TagpickError, TagpickResult};
pub use models::{load_tags, parse_tags, Tag};
pub use selector::{SelectedTag, SelectorAction, TagSelector, VisibleTag};
pub use tree::{validate, TagTree, TreeNode};
