use crate::application::dto::{ResultFormat, SplitRequest, SplitResponse, SplitResult};
use crate::application::factories::SerializerFactory;
use crate::merging::domain::MergedAnalyzerResult;
use crate::ports::inbound::ResultSplittingPort;
use crate::ports::outbound::{ProgressReporter, ResultFileReader};
use crate::shared::error::MergeError;
use crate::shared::Result;
use std::path::Path;

/// SplitResultsUseCase - reconstructs per-project analyzer results from a
/// merged result file
///
/// # Type Parameters
/// * `R` - ResultFileReader implementation
/// * `P` - ProgressReporter implementation
pub struct SplitResultsUseCase<R, P> {
    reader: R,
    progress_reporter: P,
}

impl<R, P> SplitResultsUseCase<R, P>
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

    pub fn execute(&self, request: SplitRequest) -> Result<SplitResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading merged result from: {}",
            request.merged_file.display()
        ));

        let merged = self.read_merged_result(&request.merged_file)?;
        let analyzer_results = merged.create_analyzer_results()?;

        let results = analyzer_results
            .into_iter()
            .map(|result| -> Result<SplitResult> {
                let source_file = merged
                    .results_file_for(&result.project.id)
                    .ok_or_else(|| MergeError::Validation {
                        message: format!(
                            "Project {} has no recorded analyzer result file",
                            result.project.id
                        ),
                    })?
                    .to_string();
                Ok(SplitResult {
                    source_file,
                    result,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.progress_reporter.report_completion(&format!(
            "✅ Reconstructed {} analyzer result(s)",
            results.len()
        ));

        Ok(SplitResponse::new(results))
    }

    fn read_merged_result(&self, path: &Path) -> Result<MergedAnalyzerResult> {
        let content = self.reader.read_result_file(path)?;
        let format = ResultFormat::from_path(path)?;

        SerializerFactory::create(format)
            .deserialize_merged(&content)
            .map_err(|e| {
                MergeError::ResultParseError {
                    path: path.to_path_buf(),
                    details: format!("{:#}", e),
                }
                .into()
            })
    }
}

impl<R, P> ResultSplittingPort for SplitResultsUseCase<R, P>
where
    R: ResultFileReader,
    P: ProgressReporter,
{
    fn split_results(&self, request: SplitRequest) -> Result<SplitResponse> {
        self.execute(request)
    }
}
