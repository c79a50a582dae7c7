//! Result serialization and CLI error presentation.
//!
//! This module writes the final [`Diff`] to an output stream, either as the
//! JSON report consumed by downstream automation or as a plain path listing,
//! and provides the standard error formatting used by the binary.
//!
//! # Output contract
//! The JSON report is a single object
//! `{"repo": ..., "files": [...], "dirs": [...]}`; empty collections are
//! emitted as empty arrays, never omitted.

use crate::core::diff::{Diff, Dirs, Files};
use crate::core::error::Result;
use colored::*;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Plain,
}

/// Top-level JSON document pairing the repository path with the two views
#[derive(Serialize)]
struct Report<'a> {
    repo: &'a Path,
    files: &'a Files,
    dirs: &'a Dirs,
}

/// Write the JSON report for `diff` to `w`.
pub fn write_json<W: Write>(mut w: W, repo: &Path, diff: &Diff) -> Result<()> {
    let report = Report {
        repo,
        files: &diff.files,
        dirs: &diff.dirs,
    };
    serde_json::to_writer(&mut w, &report)?;
    writeln!(w)?;
    Ok(())
}

/// Write each distinct changed file path on its own line, in
/// first-appearance order.
pub fn write_plain<W: Write>(mut w: W, diff: &Diff) -> Result<()> {
    let mut seen = HashSet::new();
    for file in diff.files.iter() {
        if seen.insert(file.path.as_str()) {
            writeln!(w, "{}", file.path)?;
        }
    }
    Ok(())
}

/// Print an error message to stderr with consistent styling
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}
