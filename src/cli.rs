use analyzer_merge::application::dto::ResultFormat;
use analyzer_merge::merging::domain::VcsInfo;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Merge per-project analyzer results into one file, or split them back apart
#[derive(Parser, Debug)]
#[command(name = "analyzer-merge")]
#[command(version)]
#[command(
    about = "Merge per-project analyzer results into one file, or split them back apart",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge analyzer result files into a single merged result
    Merge(MergeArgs),
    /// Reconstruct the per-project analyzer results from a merged result
    Split(SplitArgs),
}

#[derive(ClapArgs, Debug)]
pub struct MergeArgs {
    /// Root directory of the analyzed repository
    #[arg(short, long, default_value = ".")]
    pub repository: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: yaml or json
    #[arg(short, long)]
    pub format: Option<ResultFormat>,

    /// Mark the merged result as produced with dynamic versions allowed
    #[arg(long)]
    pub allow_dynamic_versions: bool,

    /// Fail when two files disagree about the metadata of the same package
    #[arg(long)]
    pub reject_conflicts: bool,

    /// Exit with code 1 if any merged project carries analyzer errors
    #[arg(long)]
    pub fail_on_errors: bool,

    /// Path to a config file (defaults to analyzer-merge.config.yml in the repository)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Version control system of the repository, e.g. Git
    #[arg(long, value_name = "TYPE")]
    pub vcs_type: Option<String>,

    /// Remote URL of the repository
    #[arg(long, value_name = "URL")]
    pub vcs_url: Option<String>,

    /// Revision the analyzers ran against
    #[arg(long, value_name = "REVISION")]
    pub vcs_revision: Option<String>,

    /// Analyzer result files (.yml, .yaml or .json), merged in the given order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl MergeArgs {
    /// VCS metadata assembled from the `--vcs-*` flags
    pub fn vcs(&self) -> VcsInfo {
        VcsInfo::new(
            self.vcs_type.clone().unwrap_or_default(),
            self.vcs_url.clone().unwrap_or_default(),
            self.vcs_revision.clone().unwrap_or_default(),
            String::new(),
        )
    }
}

#[derive(ClapArgs, Debug)]
pub struct SplitArgs {
    /// Merged result file to split
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory the reconstructed result files are written into
    #[arg(short = 'd', long)]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge_args(argv: &[&str]) -> MergeArgs {
        match Args::try_parse_from(argv).unwrap().command {
            Command::Merge(args) => args,
            other => panic!("expected merge command, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_defaults() {
        let args = merge_args(&["analyzer-merge", "merge", "a.yml", "b.json"]);
        assert_eq!(args.repository, PathBuf::from("."));
        assert_eq!(
            args.files,
            vec![PathBuf::from("a.yml"), PathBuf::from("b.json")]
        );
        assert!(args.output.is_none());
        assert!(args.format.is_none());
        assert!(!args.allow_dynamic_versions);
        assert!(!args.reject_conflicts);
        assert!(!args.fail_on_errors);
        assert!(args.vcs().is_empty());
    }

    #[test]
    fn test_merge_all_flags() {
        let args = merge_args(&[
            "analyzer-merge",
            "merge",
            "-r",
            "/repo",
            "-o",
            "merged.json",
            "-f",
            "JSON",
            "--allow-dynamic-versions",
            "--reject-conflicts",
            "--fail-on-errors",
            "--vcs-type",
            "Git",
            "--vcs-url",
            "https://example.com/repo.git",
            "--vcs-revision",
            "abc123",
            "a.yml",
        ]);
        assert_eq!(args.repository, PathBuf::from("/repo"));
        assert_eq!(args.output, Some(PathBuf::from("merged.json")));
        assert_eq!(args.format, Some(ResultFormat::Json));
        assert!(args.allow_dynamic_versions);
        assert!(args.reject_conflicts);
        assert!(args.fail_on_errors);

        let vcs = args.vcs();
        assert_eq!(vcs.vcs_type, "Git");
        assert_eq!(vcs.url, "https://example.com/repo.git");
        assert_eq!(vcs.revision, "abc123");
        assert_eq!(vcs.path, "");
    }

    #[test]
    fn test_merge_requires_files() {
        assert!(Args::try_parse_from(["analyzer-merge", "merge"]).is_err());
    }

    #[test]
    fn test_merge_invalid_format() {
        let result = Args::try_parse_from(["analyzer-merge", "merge", "-f", "xml", "a.yml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_split_args() {
        let args = Args::try_parse_from(["analyzer-merge", "split", "-i", "merged.yml", "-d", "out"])
            .unwrap();
        match args.command {
            Command::Split(split) => {
                assert_eq!(split.input, PathBuf::from("merged.yml"));
                assert_eq!(split.output_dir, PathBuf::from("out"));
            }
            other => panic!("expected split command, got {:?}", other),
        }
    }

    #[test]
    fn test_split_requires_output_dir() {
        assert!(Args::try_parse_from(["analyzer-merge", "split", "-i", "merged.yml"]).is_err());
    }
}
