//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ChangesetError`] which covers every failure mode of
//! the change-detection pipeline. It uses `thiserror` for ergonomic error
//! definitions and includes specialized constructors for the common cases.
//!
//! # Public API
//! - [`ChangesetError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ChangesetError>`
//!
//! # Error Categories
//! - **Repository access**: Repository cannot be opened or read
//! - **Reference resolution**: Missing refs, unresolvable revisions, no merge base
//! - **Tree comparison**: Diff computation failures
//! - **Patterns**: Ill-formed glob patterns (recovered locally, never fatal)

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-changeset
#[derive(Error, Debug)]
pub enum ChangesetError {
    // Repository access errors
    #[error("cannot open repository at '{path}': {source}")]
    RepositoryUnavailable { path: PathBuf, source: git2::Error },

    #[error("cannot resolve '{name}': {source}")]
    ReferenceUnresolved { name: String, source: git2::Error },

    #[error("no merge base between '{base}' and '{branch}'")]
    NoMergeBase { base: String, branch: String },

    #[error("tree diff failed: {0}")]
    DiffFailed(#[source] git2::Error),

    // Recovered locally: logged and treated as non-matching
    #[error("invalid pattern '{pattern}': {source}")]
    PatternInvalid {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ChangesetError
pub type Result<T> = std::result::Result<T, ChangesetError>;

impl ChangesetError {
    /// Create a repository unavailable error
    pub fn repository_unavailable(path: impl Into<PathBuf>, source: git2::Error) -> Self {
        Self::RepositoryUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a reference unresolved error
    pub fn reference_unresolved(name: impl Into<String>, source: git2::Error) -> Self {
        Self::ReferenceUnresolved {
            name: name.into(),
            source,
        }
    }

    /// Create a no merge base error
    pub fn no_merge_base(base: impl Into<String>, branch: impl Into<String>) -> Self {
        Self::NoMergeBase {
            base: base.into(),
            branch: branch.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn pattern_invalid(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::PatternInvalid {
            pattern: pattern.into(),
            source,
        }
    }
}
