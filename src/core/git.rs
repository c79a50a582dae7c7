//! Git repository adapter: base-commit selection and tree diffing.
//!
//! This module provides a high-level interface to git operations through the
//! [`GitRepo`] struct. It wraps the `git2` library to open a repository,
//! resolve the comparison base and current commits, and flatten the tree
//! diff between them into a list of kind-tagged [`Change`] records.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle with base selection and diffing
//! - [`collect_changes`]: One-shot entry point that opens, diffs, and
//!   releases the repository before returning
//!
//! # Base selection
//! On the default branch the base is the previous commit (`HEAD^`); on any
//! other branch it is `refs/remotes/origin/<default-branch>`. When neither
//! resolves, the base falls back to the remote default (`origin/HEAD`), and
//! a `--merge-base` revision overrides all of the above with the merge base
//! of that revision and the current branch.

use crate::core::{
    change::{Change, ChangeKind},
    error::{ChangesetError, Result},
};
use git2::{BranchType, Commit, Delta, DiffOptions, Oid, Repository};
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository at exactly `path`, without upward discovery.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path.as_ref())
            .map_err(|e| ChangesetError::repository_unavailable(path.as_ref(), e))?;
        Ok(GitRepo { repo })
    }

    /// Short name of the local branch whose tip equals `HEAD`'s hash.
    ///
    /// Returns the empty string when `HEAD` is detached from every branch
    /// tip.
    fn current_branch(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|e| ChangesetError::reference_unresolved("HEAD", e))?;
        let head_target = head.target();

        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if branch.get().target() == head_target {
                if let Some(name) = branch.name()? {
                    return Ok(name.to_string());
                }
            }
        }

        Ok(String::new())
    }

    fn head_commit(&self) -> Result<Commit<'_>> {
        let head = self
            .repo
            .head()
            .map_err(|e| ChangesetError::reference_unresolved("HEAD", e))?;
        Ok(head.peel_to_commit()?)
    }

    /// First parent of `HEAD`.
    fn previous_commit(&self) -> Result<Commit<'_>> {
        let obj = self
            .repo
            .revparse_single("HEAD^")
            .map_err(|e| ChangesetError::reference_unresolved("HEAD^", e))?;
        Ok(obj.peel_to_commit()?)
    }

    /// Commit at `refs/remotes/<name>`, e.g. `origin/main`.
    fn remote_commit(&self, name: &str) -> Result<Commit<'_>> {
        let refname = format!("refs/remotes/{name}");
        let reference = self
            .repo
            .find_reference(&refname)
            .map_err(|e| ChangesetError::reference_unresolved(&refname, e))?;
        log::debug!("{refname}: get commit");
        Ok(reference.peel_to_commit()?)
    }

    /// Commit at the symbolic remote default, `refs/remotes/origin/HEAD`.
    fn remote_default_commit(&self) -> Result<Commit<'_>> {
        const REMOTE_HEAD: &str = "refs/remotes/origin/HEAD";
        let reference = self
            .repo
            .find_reference(REMOTE_HEAD)
            .and_then(|r| r.resolve())
            .map_err(|e| ChangesetError::reference_unresolved(REMOTE_HEAD, e))?;
        log::debug!("{}: get commit", reference.name().unwrap_or(REMOTE_HEAD));
        Ok(reference.peel_to_commit()?)
    }

    fn resolve_revision(&self, rev: &str) -> Result<Oid> {
        let obj = self
            .repo
            .revparse_single(rev)
            .map_err(|e| ChangesetError::reference_unresolved(rev, e))?;
        Ok(obj.peel_to_commit()?.id())
    }

    /// Merge base of `base_rev` and the current branch (`HEAD` when the
    /// branch name is empty).
    fn merge_base_commit(&self, base_rev: &str, branch: &str) -> Result<Commit<'_>> {
        let branch_rev = if branch.is_empty() { "HEAD" } else { branch };
        log::debug!("merge base of {base_rev} and {branch_rev}");

        let base_oid = self.resolve_revision(base_rev)?;
        let branch_oid = self.resolve_revision(branch_rev)?;
        let oid = self
            .repo
            .merge_base(base_oid, branch_oid)
            .map_err(|_| ChangesetError::no_merge_base(base_rev, branch_rev))?;

        Ok(self.repo.find_commit(oid)?)
    }

    /// Select the comparison base per the branch-context rules.
    fn base_commit(&self, default_branch: &str, merge_base: Option<&str>) -> Result<Commit<'_>> {
        let branch = self.current_branch()?;
        log::trace!("current branch: {branch:?}");

        let provisional = if branch == default_branch {
            log::debug!("on {default_branch}: comparing against the previous commit");
            self.previous_commit().ok()
        } else {
            log::debug!("comparing against origin/{default_branch}");
            self.remote_commit(&format!("origin/{default_branch}")).ok()
        };

        let base = match provisional {
            Some(commit) => commit,
            None => {
                log::debug!("falling back to the remote default branch");
                self.remote_default_commit()?
            }
        };

        match merge_base {
            Some(rev) if !rev.is_empty() => self.merge_base_commit(rev, &branch),
            _ => Ok(base),
        }
    }

    /// Flatten the tree diff between `base` and `current` into raw changes,
    /// in the diff's lexicographic path order.
    fn changes_between(&self, base: &Commit, current: &Commit) -> Result<Vec<Change>> {
        let old_tree = base.tree()?;
        let new_tree = current.tree()?;

        let mut opts = DiffOptions::new();
        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))
            .map_err(ChangesetError::DiffFailed)?;
        log::debug!("number of changes: {}", diff.deltas().len());

        let mut changes = Vec::with_capacity(diff.deltas().len());
        for delta in diff.deltas() {
            let (kind, file) = match delta.status() {
                Delta::Added => (ChangeKind::Added, delta.new_file()),
                Delta::Deleted => (ChangeKind::Deleted, delta.old_file()),
                Delta::Modified => (ChangeKind::Modified, delta.new_file()),
                _ => {
                    // prefer the pre-image name for unclassified actions
                    if delta.old_file().path().is_some() {
                        (ChangeKind::Unknown, delta.old_file())
                    } else {
                        (ChangeKind::Unknown, delta.new_file())
                    }
                }
            };
            let path = file
                .path()
                .and_then(Path::to_str)
                .ok_or(ChangesetError::InvalidUtf8Path)?;
            changes.push(Change::new(path, kind));
        }

        Ok(changes)
    }
}

/// Open the repository at `path`, select the base commit, and return the raw
/// change list between it and `HEAD`.
///
/// The repository handle lives only for the duration of this call; the
/// projection engine never sees it.
pub fn collect_changes(
    path: &Path,
    default_branch: &str,
    merge_base: Option<&str>,
) -> Result<Vec<Change>> {
    let repo = GitRepo::open(path)?;
    let base = repo.base_commit(default_branch, merge_base)?;
    let current = repo.head_commit()?;
    log::debug!("diffing {}..{}", base.id(), current.id());
    repo.changes_between(&base, &current)
}
