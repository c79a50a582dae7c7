//! Change projection engine.
//!
//! Transforms the raw change list produced by the repository adapter into
//! the filtered file and directory views. The engine is a pure function of
//! `(raw changes, configuration, on-disk snapshot)`; its only side effect is
//! one existence stat per distinct directory, resolved against the opened
//! repository's root and cached for the whole invocation.
//!
//! The filter pipeline for each view runs in a fixed order: group-by gate,
//! record building, kind filter, prefix filters, ignore filters, existence
//! filter. Aggregation happens before kind-filtering so that a directory is
//! only dropped once the filter has emptied its whole group.

use crate::core::change::Change;
use crate::core::config::{DirExist, Options};
use crate::core::diff::{Diff, Dir, Dirs, File, Files, ParentDir};
use crate::core::error::ChangesetError;
use glob::Pattern;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Compiled form of the `group_by` option.
enum GroupGate {
    /// Grouping disabled; every change passes, keyed by its lexical parent
    Off,
    /// Changes must match `<group-by>/**`; keyed by the leading `depth`
    /// path segments
    On { pattern: Pattern, depth: usize },
    /// The pattern failed to compile; nothing passes
    Never,
}

impl GroupGate {
    fn compile(group_by: &str) -> GroupGate {
        if group_by.is_empty() {
            return GroupGate::Off;
        }
        let root = group_by.trim_end_matches('/');
        match Pattern::new(&format!("{root}/**")) {
            Ok(pattern) => GroupGate::On {
                pattern,
                depth: root.split('/').count(),
            },
            Err(err) => {
                log::error!(
                    "{}",
                    ChangesetError::pattern_invalid(group_by, err)
                );
                GroupGate::Never
            }
        }
    }

    fn admits(&self, path: &str) -> bool {
        match self {
            GroupGate::Off => true,
            GroupGate::On { pattern, .. } => pattern.matches(path),
            GroupGate::Never => false,
        }
    }
}

/// Point-in-time view of directory existence, stat'ed at most once per path.
struct DiskSnapshot {
    root: PathBuf,
    seen: HashMap<String, bool>,
}

impl DiskSnapshot {
    fn new(root: &Path) -> Self {
        DiskSnapshot {
            root: root.to_path_buf(),
            seen: HashMap::new(),
        }
    }

    fn exists(&mut self, dir: &str) -> bool {
        if let Some(&exist) = self.seen.get(dir) {
            return exist;
        }
        let exist = self.root.join(dir).exists();
        self.seen.insert(dir.to_string(), exist);
        exist
    }
}

/// Leading `depth` path segments of `path`, the directory-view aggregation
/// key under `group_by`. Paths shorter than the requested depth are
/// unmatched and yield `None`.
fn aggregation_key(path: &str, depth: usize) -> Option<String> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < depth {
        return None;
    }
    Some(segments[..depth].join("/"))
}

/// Compile ignore globs, logging and dropping ill-formed patterns.
///
/// A dropped pattern matches nothing, so the records it would have tested
/// are retained.
fn compile_ignores(ignores: &[String]) -> Vec<Pattern> {
    ignores
        .iter()
        .filter_map(|raw| match Pattern::new(raw) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                log::error!("{}", ChangesetError::pattern_invalid(raw, err));
                None
            }
        })
        .collect()
}

/// Project the raw change list into the filtered file and directory views.
pub fn project(changes: &[Change], root: &Path, opt: &Options) -> Diff {
    let gate = GroupGate::compile(&opt.group_by);
    let ignores = compile_ignores(&opt.ignores);
    let mut disk = DiskSnapshot::new(root);

    let files = file_view(changes, &gate, &ignores, opt, &mut disk);
    let dirs = dir_view(changes, &gate, &ignores, opt, &mut disk);

    Diff { files, dirs }
}

fn build_file(change: &Change, disk: &mut DiskSnapshot) -> File {
    File {
        path: change.path.clone(),
        kind: change.kind,
        parent_dir: ParentDir {
            path: change.dir.clone(),
            exist: disk.exists(&change.dir),
        },
    }
}

fn file_view(
    changes: &[Change],
    gate: &GroupGate,
    ignores: &[Pattern],
    opt: &Options,
    disk: &mut DiskSnapshot,
) -> Files {
    let mut files = Files::default();
    for change in changes {
        if !gate.admits(&change.path) {
            log::debug!("file view: {} not under {}", change.path, opt.group_by);
            continue;
        }
        files.0.push(build_file(change, disk));
    }

    if !opt.kinds.is_empty() {
        files = files.filter(|f| opt.retains(f.kind));
    }

    for prefix in &opt.prefixes {
        files = files.filter(|f| f.path.starts_with(prefix.as_str()));
    }

    for pattern in ignores {
        files = files.filter(|f| !pattern.matches(&f.path));
    }

    match opt.dir_exist {
        DirExist::RequireExists => files.filter(|f| f.parent_dir.exist),
        DirExist::RequireMissing => files.filter(|f| !f.parent_dir.exist),
        DirExist::Unconstrained => files,
    }
}

fn dir_view(
    changes: &[Change],
    gate: &GroupGate,
    ignores: &[Pattern],
    opt: &Options,
    disk: &mut DiskSnapshot,
) -> Dirs {
    // Group in first-appearance order of each aggregation key.
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Dir> = HashMap::new();

    for change in changes {
        let key = match gate {
            GroupGate::Off => change.dir.clone(),
            GroupGate::On { pattern, depth } => {
                if !pattern.matches(&change.path) {
                    log::debug!("dir view: {} not under {}", change.path, opt.group_by);
                    continue;
                }
                match aggregation_key(&change.path, *depth) {
                    Some(key) => key,
                    None => {
                        log::debug!("dir view: {} shorter than {}", change.path, opt.group_by);
                        continue;
                    }
                }
            }
            GroupGate::Never => continue,
        };

        if let Some(dir) = groups.get_mut(&key) {
            log::trace!("dir view: updated {key:?}");
            dir.files.0.push(build_file(change, disk));
        } else {
            log::trace!("dir view: created {key:?}");
            order.push(key.clone());
            let exist = disk.exists(&key);
            groups.insert(
                key.clone(),
                Dir {
                    path: key,
                    exist,
                    files: Files(vec![build_file(change, disk)]),
                },
            );
        }
    }

    let mut dirs: Dirs = order.into_iter().filter_map(|key| groups.remove(&key)).collect();

    // Kind-filter each group, then prune directories the filter emptied.
    if !opt.kinds.is_empty() {
        dirs = dirs
            .into_iter()
            .filter_map(|mut dir| {
                let kept = dir.files.filter(|f| opt.retains(f.kind));
                if kept.is_empty() {
                    None
                } else {
                    dir.files = kept;
                    Some(dir)
                }
            })
            .collect();
    }

    for prefix in &opt.prefixes {
        dirs = dirs.filter(|d| d.path.starts_with(prefix.as_str()));
    }

    for pattern in ignores {
        dirs = dirs.filter(|d| !pattern.matches(&d.path));
    }

    match opt.dir_exist {
        DirExist::RequireExists => dirs.filter(|d| d.exist),
        DirExist::RequireMissing => dirs.filter(|d| !d.exist),
        DirExist::Unconstrained => dirs,
    }
}
