//! Result container: the file and directory views of a change set.
//!
//! This module defines the records returned to the caller and the small
//! collection types the projection engine manipulates. [`Files`] and
//! [`Dirs`] expose value-semantics transformers (`filter`, `map`) that
//! return new collections without mutating their input; none of the
//! operations here perform I/O.
//!
//! # Public API
//! - [`File`] / [`ParentDir`]: per-file view records
//! - [`Dir`]: per-directory view record with its member files
//! - [`Files`] / [`Dirs`]: ordered collections with `filter`/`map`
//! - [`Diff`]: the `{files, dirs}` pair handed back to the caller

use crate::core::change::ChangeKind;
use serde::{Deserialize, Serialize};

/// Parent directory descriptor of a changed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDir {
    pub path: String,
    pub exist: bool,
}

/// One changed file after projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub path: String,
    pub kind: ChangeKind,
    pub parent_dir: ParentDir,
}

/// One changed directory with the files aggregated under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dir {
    pub path: String,
    pub exist: bool,
    pub files: Files,
}

/// Ordered collection of [`File`] records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Files(pub Vec<File>);

impl Files {
    /// New collection holding only the files the predicate accepts
    pub fn filter<P>(&self, predicate: P) -> Files
    where
        P: Fn(&File) -> bool,
    {
        Files(self.0.iter().filter(|f| predicate(f)).cloned().collect())
    }

    /// New collection with the transform applied to every file
    pub fn map<T>(&self, transform: T) -> Files
    where
        T: Fn(&File) -> File,
    {
        Files(self.0.iter().map(transform).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, File> {
        self.0.iter()
    }
}

impl IntoIterator for Files {
    type Item = File;
    type IntoIter = std::vec::IntoIter<File>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<File> for Files {
    fn from_iter<I: IntoIterator<Item = File>>(iter: I) -> Self {
        Files(iter.into_iter().collect())
    }
}

/// Ordered collection of [`Dir`] records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dirs(pub Vec<Dir>);

impl Dirs {
    /// New collection holding only the dirs the predicate accepts
    pub fn filter<P>(&self, predicate: P) -> Dirs
    where
        P: Fn(&Dir) -> bool,
    {
        Dirs(self.0.iter().filter(|d| predicate(d)).cloned().collect())
    }

    /// New collection with the transform applied to every dir
    pub fn map<T>(&self, transform: T) -> Dirs
    where
        T: Fn(&Dir) -> Dir,
    {
        Dirs(self.0.iter().map(transform).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl IntoIterator for Dirs {
    type Item = Dir;
    type IntoIter = std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Dir> for Dirs {
    fn from_iter<I: IntoIterator<Item = Dir>>(iter: I) -> Self {
        Dirs(iter.into_iter().collect())
    }
}

/// The two correlated views returned by the projection engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    pub files: Files,
    pub dirs: Dirs,
}
