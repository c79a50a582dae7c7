use clap::{ArgAction, Parser, ValueEnum};
use git_changeset::commands::execute_changes;
use git_changeset::core::{
    error::Result,
    print_error, ChangeKind, DirExist, Options, OutputFormat,
};
use std::env;

#[derive(Parser)]
#[command(name = "git-changeset")]
#[command(about = "Report file and directory paths changed between two git revisions")]
#[command(version = env!("CARGO_PKG_VERSION"), disable_version_flag = true)]
struct Cli {
    /// Branch treated as the mainline when selecting the comparison base
    #[arg(long, value_name = "NAME", default_value = "main")]
    default_branch: String,

    /// Compare against the merge-base of this revision and the current branch
    #[arg(long, value_name = "REV")]
    merge_base: Option<String>,

    /// Keep only changes of this kind (repeatable)
    #[arg(long = "filter", value_enum, value_name = "KIND")]
    filters: Vec<KindFilter>,

    /// Keep only records whose directory exists on disk
    #[arg(long, conflicts_with = "dir_not_exist")]
    dir_exist: bool,

    /// Keep only records whose directory is gone from disk
    #[arg(long)]
    dir_not_exist: bool,

    /// Drop paths matching this glob; `**` spans directories (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    ignores: Vec<String>,

    /// Gate changes to this path prefix and aggregate directories at its depth
    #[arg(long, value_name = "PATH", default_value = "")]
    group_by: String,

    /// Format to output the result
    #[arg(short = 'o', long, value_enum, default_value = "json")]
    output: OutputArg,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Path prefixes to keep; a record must start with every given prefix
    #[arg(value_name = "PREFIX")]
    prefixes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindFilter {
    Added,
    Modified,
    Deleted,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Json,
    Plain,
}

/// Collapse repeated `--filter` values into the engine's kind set; `all`
/// (and no filter at all) means no constraint.
fn kind_set(filters: &[KindFilter]) -> Vec<ChangeKind> {
    if filters.is_empty() || filters.contains(&KindFilter::All) {
        return Vec::new();
    }

    let mut kinds = Vec::new();
    for filter in filters {
        let kind = match filter {
            KindFilter::Added => ChangeKind::Added,
            KindFilter::Modified => ChangeKind::Modified,
            KindFilter::Deleted => ChangeKind::Deleted,
            KindFilter::All => continue,
        };
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

fn run(cli: Cli) -> Result<()> {
    let repo = env::current_dir()?;
    log::info!("git repo: {}", repo.display());

    let dir_exist = if cli.dir_exist {
        DirExist::RequireExists
    } else if cli.dir_not_exist {
        DirExist::RequireMissing
    } else {
        DirExist::Unconstrained
    };

    let opt = Options {
        default_branch: cli.default_branch,
        merge_base: cli.merge_base,
        kinds: kind_set(&cli.filters),
        prefixes: cli.prefixes,
        ignores: cli.ignores,
        group_by: cli.group_by,
        dir_exist,
    };

    let format = match cli.output {
        OutputArg::Json => OutputFormat::Json,
        OutputArg::Plain => OutputFormat::Plain,
    };

    execute_changes(&repo, &opt, format)
}

fn main() {
    // Verbosity is keyed off the LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::new().filter("LOG")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // help and version are not failures
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    log::info!("version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_set_defaults_to_unconstrained() {
        assert!(kind_set(&[]).is_empty());
        assert!(kind_set(&[KindFilter::All]).is_empty());
        assert!(kind_set(&[KindFilter::Added, KindFilter::All]).is_empty());
    }

    #[test]
    fn test_kind_set_maps_and_dedups() {
        let kinds = kind_set(&[KindFilter::Added, KindFilter::Deleted, KindFilter::Added]);
        assert_eq!(kinds, vec![ChangeKind::Added, ChangeKind::Deleted]);
    }

    #[test]
    fn test_cli_parses_full_flag_surface() {
        let cli = Cli::try_parse_from([
            "git-changeset",
            "--default-branch",
            "trunk",
            "--merge-base",
            "trunk",
            "--filter",
            "added",
            "--filter",
            "modified",
            "--dir-exist",
            "--ignore",
            "**/*.txt",
            "--group-by",
            "src",
            "-o",
            "plain",
            "src/a",
            "src/b",
        ])
        .unwrap();

        assert_eq!(cli.default_branch, "trunk");
        assert_eq!(cli.merge_base.as_deref(), Some("trunk"));
        assert_eq!(cli.filters, vec![KindFilter::Added, KindFilter::Modified]);
        assert!(cli.dir_exist);
        assert_eq!(cli.ignores, vec!["**/*.txt"]);
        assert_eq!(cli.group_by, "src");
        assert_eq!(cli.output, OutputArg::Plain);
        assert_eq!(cli.prefixes, vec!["src/a", "src/b"]);
    }

    #[test]
    fn test_cli_rejects_conflicting_existence_flags() {
        let result = Cli::try_parse_from(["git-changeset", "--dir-exist", "--dir-not-exist"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_filter_value() {
        let result = Cli::try_parse_from(["git-changeset", "--filter", "renamed"]);
        assert!(result.is_err());
    }
}
