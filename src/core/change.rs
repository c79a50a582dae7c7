//! Type-safe change classification and the raw change record.
//!
//! This module defines [`ChangeKind`], the classification of a single path
//! difference between two trees, and [`Change`], the raw record produced by
//! the repository adapter before any filtering or aggregation happens.
//!
//! # Public API
//! - [`ChangeKind`]: Classification enum for path changes
//! - [`Change`]: A path-keyed difference tagged with its kind
//! - [`parent_dir`]: Lexical parent of a repository-relative path
//!
//! # Key Features
//! - **Type safety**: Compile-time checking instead of string comparisons
//! - **Wire format**: Serializes as `"added"` / `"deleted"` / `"modified"` /
//!   `"unknown"` for the JSON report
//! - **Display formatting**: Consistent string representation for output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single path change between two trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Path present in the current tree but not the base tree
    Added,
    /// Path present in the base tree but not the current tree
    Deleted,
    /// Path present in both trees with differing content
    Modified,
    /// Any other tree-diff action
    Unknown,
}

impl ChangeKind {
    /// Get the string representation used in the JSON report
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Modified => "modified",
            ChangeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single path-keyed difference between the base and current trees.
///
/// `path` is the repository-relative POSIX path of the post-image for
/// additions and modifications, and of the pre-image for deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub path: String,
    pub dir: String,
    pub kind: ChangeKind,
}

impl Change {
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        let path = path.into();
        let dir = parent_dir(&path);
        Change { path, dir, kind }
    }
}

/// Lexical parent directory of a repository-relative path.
///
/// Returns `.` for paths at the repository root.
pub fn parent_dir(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => ".".to_string(),
    }
}
