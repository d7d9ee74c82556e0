use std::path::PathBuf;

/// SplitRequest - Internal request DTO for the split use case
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Merged result file to reconstruct the per-project results from
    pub merged_file: PathBuf,
}

impl SplitRequest {
    pub fn new(merged_file: PathBuf) -> Self {
        Self { merged_file }
    }
}
