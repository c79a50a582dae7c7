//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with the
//! branch layouts and remote refs the end-to-end scenarios need.

#![allow(dead_code)]

use anyhow::{ensure, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs a git command in the repository, failing the test on a non-zero exit
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    ensure!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository with a
/// `main` initial branch, and sets up basic git configuration to avoid user
/// prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Creates a file (and its parent directories) with the given content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// Removes an empty directory from the filesystem
pub fn remove_dir(repo_path: &Path, dirname: &str) -> Result<()> {
    fs::remove_dir(repo_path.join(dirname))?;
    Ok(())
}

/// Stages every pending change
pub fn git_add_all(repo_path: &Path) -> Result<()> {
    git(repo_path, &["add", "-A"])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

/// Creates and switches to a new branch
pub fn git_checkout_new(repo_path: &Path, branch: &str) -> Result<()> {
    git(repo_path, &["checkout", "-b", branch])
}

/// Switches to an existing branch
pub fn git_checkout(repo_path: &Path, branch: &str) -> Result<()> {
    git(repo_path, &["checkout", branch])
}

/// Points `refs/remotes/origin/<name>` at `rev`, standing in for a fetched
/// remote-tracking branch
pub fn set_remote_ref(repo_path: &Path, name: &str, rev: &str) -> Result<()> {
    let refname = format!("refs/remotes/origin/{name}");
    git(repo_path, &["update-ref", &refname, rev])
}

/// Points the symbolic `refs/remotes/origin/HEAD` at the given
/// remote-tracking branch
pub fn set_remote_head(repo_path: &Path, name: &str) -> Result<()> {
    let target = format!("refs/remotes/origin/{name}");
    git(repo_path, &["symbolic-ref", "refs/remotes/origin/HEAD", &target])
}
