//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific branch layouts
//! and change sets to test the detection pipeline consistently.

#![allow(dead_code)]

use super::repository::*;
use anyhow::Result;

/// Scenario: a `feature` branch diverged from `main` carrying three
/// additions, one modification, and one deletion relative to the merge base:
///
/// ```text
/// added   : src/a/a1.go, src/a/a2.go, src/b/b1.go
/// modified: src/a/a1.txt
/// deleted : docs/old.md (the docs directory is also gone from disk)
/// ```
///
/// `refs/remotes/origin/main` points at main's tip, as after a fetch.
pub fn create_feature_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "src/a/a1.txt", "v1\n")?;
    create_file(&repo.path, "docs/old.md", "obsolete\n")?;
    git_add_all(&repo.path)?;
    git_commit(&repo.path, "initial")?;
    set_remote_ref(&repo.path, "main", "refs/heads/main")?;

    git_checkout_new(&repo.path, "feature")?;
    create_file(&repo.path, "src/a/a1.go", "package a\n")?;
    create_file(&repo.path, "src/a/a2.go", "package a\n")?;
    create_file(&repo.path, "src/b/b1.go", "package b\n")?;
    create_file(&repo.path, "src/a/a1.txt", "v2\n")?;
    remove_file(&repo.path, "docs/old.md")?;
    remove_dir(&repo.path, "docs")?;
    git_add_all(&repo.path)?;
    git_commit(&repo.path, "feature work")?;

    Ok(repo)
}

/// Scenario: `main` and `feature` have both advanced since the branch
/// point, so origin/main's tip is no longer the merge base. `feature` holds
/// two commits of its own (`f1.txt`, `f2.txt`); `main` grew
/// `main_only.txt`.
pub fn create_diverged_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "base.txt", "base\n")?;
    git_add_all(&repo.path)?;
    git_commit(&repo.path, "initial")?;

    git_checkout_new(&repo.path, "feature")?;
    create_file(&repo.path, "f1.txt", "f1\n")?;
    git_add_all(&repo.path)?;
    git_commit(&repo.path, "feature one")?;
    create_file(&repo.path, "f2.txt", "f2\n")?;
    git_add_all(&repo.path)?;
    git_commit(&repo.path, "feature two")?;

    git_checkout(&repo.path, "main")?;
    create_file(&repo.path, "main_only.txt", "m\n")?;
    git_add_all(&repo.path)?;
    git_commit(&repo.path, "mainline work")?;
    set_remote_ref(&repo.path, "main", "refs/heads/main")?;

    git_checkout(&repo.path, "feature")?;

    Ok(repo)
}
