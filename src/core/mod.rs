//! Core functionality for the git-changeset tool.
//!
//! This module provides the fundamental building blocks: the repository
//! adapter, the change projection engine, the result container, and the
//! shared error and output handling.

pub mod change;
pub mod config;
pub mod diff;
pub mod error;
pub mod git;
pub mod output;
pub mod project;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ChangesetError, Result};

// === Repository adapter ===
// Base-commit selection and tree diffing over git2
pub use git::{collect_changes, GitRepo};

// === Change model ===
// Raw changes and their kind classification
pub use change::{parent_dir, Change, ChangeKind};

// === Configuration ===
// The record driving base selection and the filter pipeline
pub use config::{DirExist, Options};

// === Result container ===
// The file and directory views with their value-semantics helpers
pub use diff::{Diff, Dir, Dirs, File, Files, ParentDir};

// === Projection engine ===
// Raw changes + configuration -> filtered views
pub use project::project;

// === Output ===
// Report writers and CLI error presentation
pub use output::{print_error, write_json, write_plain, OutputFormat};
