//! The change-report command: adapter, engine, and writer glued together.

use crate::core::{
    error::Result,
    git::collect_changes,
    output::{write_json, write_plain, OutputFormat},
    project::project,
    Options,
};
use std::io;
use std::path::Path;

/// Compute the change set of `repo` under `opt` and write it to stdout in
/// the requested format.
pub fn execute_changes(repo: &Path, opt: &Options, format: OutputFormat) -> Result<()> {
    let changes = collect_changes(repo, &opt.default_branch, opt.merge_base.as_deref())?;
    log::info!("collected {} raw changes", changes.len());

    let diff = project(&changes, repo, opt);
    log::info!(
        "{} files, {} dirs after filtering",
        diff.files.len(),
        diff.dirs.len()
    );

    let stdout = io::stdout();
    match format {
        OutputFormat::Json => write_json(stdout.lock(), repo, &diff),
        OutputFormat::Plain => write_plain(stdout.lock(), &diff),
    }
}
