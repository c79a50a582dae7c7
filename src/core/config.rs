//! The configuration record consumed by the projection engine.
//!
//! [`Options`] is supplied by the CLI layer and drives both the base-commit
//! selection in the repository adapter and the filter pipeline in the
//! projection engine. The engine itself is a pure function of the raw change
//! list plus this record.

use crate::core::change::ChangeKind;

/// Tri-valued constraint on a record's on-disk existence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirExist {
    /// Retain only records whose directory exists on disk
    RequireExists,
    /// Retain only records whose directory is gone from disk
    RequireMissing,
    /// No constraint
    #[default]
    Unconstrained,
}

/// Configuration record for one detection run
#[derive(Debug, Clone)]
pub struct Options {
    /// Branch treated as the mainline when selecting the base commit
    pub default_branch: String,
    /// When set, compare against the merge-base of this revision and the
    /// current branch instead of the default base
    pub merge_base: Option<String>,
    /// Change kinds to retain; empty means retain all
    pub kinds: Vec<ChangeKind>,
    /// Path-prefix allow-list, applied as successive filters (intersection)
    pub prefixes: Vec<String>,
    /// Glob patterns (`**` spans directories) whose matches are dropped
    pub ignores: Vec<String>,
    /// Path prefix that both gates records and re-roots directory
    /// aggregation; empty disables grouping
    pub group_by: String,
    /// Existence constraint applied to both views
    pub dir_exist: DirExist,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            default_branch: "main".to_string(),
            merge_base: None,
            kinds: Vec::new(),
            prefixes: Vec::new(),
            ignores: Vec::new(),
            group_by: String::new(),
            dir_exist: DirExist::Unconstrained,
        }
    }
}

impl Options {
    /// Whether a change of the given kind survives the kind filter
    pub fn retains(&self, kind: ChangeKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }
}
