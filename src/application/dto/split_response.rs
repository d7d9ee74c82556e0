use crate::merging::domain::AnalyzerResult;

/// One reconstructed analyzer result with the file it was originally read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    pub source_file: String,
    pub result: AnalyzerResult,
}

/// SplitResponse - Internal response DTO from the split use case
#[derive(Debug, Clone)]
pub struct SplitResponse {
    /// Reconstructed results in project identifier order
    pub results: Vec<SplitResult>,
}

impl SplitResponse {
    pub fn new(results: Vec<SplitResult>) -> Self {
        Self { results }
    }
}
