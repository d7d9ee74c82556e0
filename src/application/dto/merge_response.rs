use crate::merging::domain::MergedAnalyzerResult;

/// MergeResponse - Internal response DTO from the merge use case
#[derive(Debug, Clone)]
pub struct MergeResponse {
    /// The merged snapshot
    pub merged_result: MergedAnalyzerResult,
    /// Number of result files that registered a project seen before
    pub duplicate_projects: usize,
}

impl MergeResponse {
    pub fn new(merged_result: MergedAnalyzerResult, duplicate_projects: usize) -> Self {
        Self {
            merged_result,
            duplicate_projects,
        }
    }

    /// Whether any analyzer reported errors for its project
    pub fn has_analyzer_errors(&self) -> bool {
        self.merged_result.has_errors()
    }
}
