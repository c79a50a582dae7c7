//! Git Changeset - a CLI tool that reports the paths changed between two git revisions.
//!
//! This library provides the core functionality for git-changeset: selecting
//! the comparison base commit, flattening the tree diff into a kind-tagged
//! change list, and projecting that list through the configurable filter
//! pipeline into correlated per-file and per-directory views.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The repository adapter over `git2`
//! - The change projection engine and its configuration record
//! - The result container with its value-semantics helpers
//! - Error handling and result types
//! - JSON and plain report writers

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    collect_changes,
    parent_dir,
    print_error,

    project,

    write_json,
    write_plain,

    Change,
    // Change model
    ChangeKind,
    // Error handling
    ChangesetError,

    Diff,
    Dir,
    // Result container
    DirExist,
    Dirs,
    File,
    Files,

    // Repository adapter
    GitRepo,

    // Configuration
    Options,
    OutputFormat,
    ParentDir,
    Result,
};
