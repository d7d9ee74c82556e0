use crate::application::dto::{MergeRequest, MergeResponse, ResultFormat};
use crate::application::factories::SerializerFactory;
use crate::merging::domain::AnalyzerResult;
use crate::merging::services::MergedResultsBuilder;
use crate::ports::inbound::ResultMergingPort;
use crate::ports::outbound::{ProgressReporter, ResultFileReader};
use crate::shared::error::MergeError;
use crate::shared::Result;
use std::path::Path;

/// MergeResultsUseCase - reads analyzer result files and merges them
///
/// # Type Parameters
/// * `R` - ResultFileReader implementation
/// * `P` - ProgressReporter implementation
pub struct MergeResultsUseCase<R, P> {
    reader: R,
    progress_reporter: P,
}

impl<R, P> MergeResultsUseCase<R, P>
where
    R: ResultFileReader,
    P: ProgressReporter,
{
    pub fn new(reader: R, progress_reporter: P) -> Self {
        Self {
            reader,
            progress_reporter,
        }
    }

    /// Executes the merge
    ///
    /// Files are registered in the order given by the request. A project
    /// registered by more than one file is reported as a warning and the last
    /// file wins. A file whose `allow_dynamic_versions` differs from the
    /// request's flag is reported as a warning; the merged result carries the
    /// request's flag.
    pub fn execute(&self, request: MergeRequest) -> Result<MergeResponse> {
        if request.result_files.is_empty() {
            return Err(MergeError::Validation {
                message: "No analyzer result files were given".to_string(),
            }
            .into());
        }

        let mut builder = MergedResultsBuilder::new(
            request.allow_dynamic_versions,
            &request.repository_path,
            request.vcs.clone(),
        )?
        .with_conflict_policy(request.conflict_policy);

        let total = request.result_files.len();
        self.progress_reporter.report(&format!(
            "📖 Merging {} analyzer result file(s) for repository: {}",
            total,
            request.repository_path.display()
        ));

        let mut duplicate_projects = 0;
        for (index, path) in request.result_files.iter().enumerate() {
            let result = self.read_analyzer_result(path)?;
            let source_file = path.to_string_lossy().into_owned();

            if builder.contains_project(&result.project.id) {
                duplicate_projects += 1;
                self.progress_reporter.report_warning(&format!(
                    "Project {} was already registered; using the result from {}",
                    result.project.id, source_file
                ));
            }

            if result.allow_dynamic_versions != request.allow_dynamic_versions {
                self.progress_reporter.report_warning(&format!(
                    "{} was analyzed with allow_dynamic_versions={}, but the merged result uses {}",
                    source_file, result.allow_dynamic_versions, request.allow_dynamic_versions
                ));
            }

            builder.add_result(&source_file, result)?;
            self.progress_reporter
                .report_progress(index + 1, total, Some(&source_file));
        }

        let merged_result = builder.build();
        self.progress_reporter.report_completion(&format!(
            "✅ Merged {} project(s) with {} unique package(s)",
            merged_result.projects().len(),
            merged_result.packages().len()
        ));

        if merged_result.has_errors() {
            self.progress_reporter.report_warning(&format!(
                "The analyzers reported {} error(s)",
                merged_result.error_count()
            ));
        }

        Ok(MergeResponse::new(merged_result, duplicate_projects))
    }

    fn read_analyzer_result(&self, path: &Path) -> Result<AnalyzerResult> {
        let content = self.reader.read_result_file(path)?;
        let format = ResultFormat::from_path(path)?;

        SerializerFactory::create(format)
            .deserialize_analyzer_result(&content)
            .map_err(|e| {
                MergeError::ResultParseError {
                    path: path.to_path_buf(),
                    details: format!("{:#}", e),
                }
                .into()
            })
    }
}

impl<R, P> ResultMergingPort for MergeResultsUseCase<R, P>
where
    R: ResultFileReader,
    P: ProgressReporter,
{
    fn merge_results(&self, request: MergeRequest) -> Result<MergeResponse> {
        self.execute(request)
    }
}
