mod cli;

use analyzer_merge::adapters::outbound::console::StderrProgressReporter;
use analyzer_merge::adapters::outbound::filesystem::FileSystemReader;
use analyzer_merge::application::dto::{MergeRequest, ResultFormat, SplitRequest};
use analyzer_merge::application::factories::{
    PresenterFactory, PresenterType, SerializerFactory,
};
use analyzer_merge::application::use_cases::{MergeResultsUseCase, SplitResultsUseCase};
use analyzer_merge::config::{self, ConfigFile};
use analyzer_merge::merging::policies::PackageConflictPolicy;
use analyzer_merge::ports::inbound::{ResultMergingPort, ResultSplittingPort};
use analyzer_merge::ports::outbound::ProgressReporter;
use analyzer_merge::shared::error::{ExitCode, MergeError};
use analyzer_merge::shared::security::provenance_relative_path;
use analyzer_merge::shared::Result;
use cli::{Args, Command, MergeArgs, SplitArgs};
use std::path::Path;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    match args.command {
        Command::Merge(merge_args) => run_merge(merge_args),
        Command::Split(split_args) => run_split(split_args),
    }
}

fn run_merge(args: MergeArgs) -> Result<ExitCode> {
    validate_repository_path(&args.repository)?;

    let config = load_config(&args)?;
    let progress_reporter = StderrProgressReporter::new();
    for warning in config::unknown_field_warnings(&config) {
        progress_reporter.report_warning(&warning);
    }

    let format = resolve_format(&args, &config)?;
    let conflict_policy = if args.reject_conflicts {
        PackageConflictPolicy::Reject
    } else {
        config.package_conflicts.unwrap_or_default()
    };
    let allow_dynamic_versions =
        args.allow_dynamic_versions || config.allow_dynamic_versions.unwrap_or(false);
    let fail_on_errors = args.fail_on_errors || config.fail_on_errors.unwrap_or(false);

    let request = MergeRequest::new(
        args.repository.clone(),
        args.files.clone(),
        allow_dynamic_versions,
    )
    .with_vcs(args.vcs())
    .with_conflict_policy(conflict_policy);

    let use_case = MergeResultsUseCase::new(FileSystemReader::new(), progress_reporter);
    let response = use_case.merge_results(request)?;

    eprintln!("{}", SerializerFactory::progress_message(format));
    let serialized = SerializerFactory::create(format).serialize_merged(&response.merged_result)?;

    let presenter_type = match args.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&serialized)?;

    if fail_on_errors && response.has_analyzer_errors() {
        eprintln!(
            "❌ {} analyzer error(s) found in the merged result",
            response.merged_result.error_count()
        );
        return Ok(ExitCode::AnalyzerErrorsFound);
    }

    Ok(ExitCode::Success)
}

fn run_split(args: SplitArgs) -> Result<ExitCode> {
    let use_case = SplitResultsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.split_results(SplitRequest::new(args.input))?;

    for split in &response.results {
        let relative_path = provenance_relative_path(&split.source_file)?;
        let format = ResultFormat::from_path(&relative_path)?;
        let serialized = SerializerFactory::create(format).serialize_analyzer_result(&split.result)?;

        let output_path = args.output_dir.join(relative_path);
        PresenterFactory::create(PresenterType::TreeFile(output_path.clone()))
            .present(&serialized)?;
        eprintln!("📄 Wrote {}", output_path.display());
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or discovers one in the repository root
fn load_config(args: &MergeArgs) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => match config::discover_config(&args.repository)? {
            Some(discovered) => {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    args.repository.join(config::CONFIG_FILENAME).display()
                );
                Ok(discovered)
            }
            None => Ok(ConfigFile::default()),
        },
    }
}

/// Output format: the `--format` flag, then the config file, then the output
/// file extension, falling back to YAML
fn resolve_format(args: &MergeArgs, config: &ConfigFile) -> Result<ResultFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    if let Some(format) = config.result_format()? {
        return Ok(format);
    }
    Ok(args
        .output
        .as_deref()
        .and_then(|path| ResultFormat::from_path(path).ok())
        .unwrap_or_default())
}

fn validate_repository_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MergeError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| MergeError::InvalidRepositoryPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(MergeError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Repository path is a symbolic link".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(MergeError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
