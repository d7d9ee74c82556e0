use crate::application::dto::{MergeRequest, MergeResponse, SplitRequest, SplitResponse};
use crate::shared::Result;

/// ResultMergingPort - Inbound port for merging analyzer result files
pub trait ResultMergingPort {
    /// Merges the analyzer result files named by the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - No files are given
    /// - A file cannot be read, has an unsupported extension or does not parse
    /// - The conflict policy rejects a package
    fn merge_results(&self, request: MergeRequest) -> Result<MergeResponse>;
}

/// ResultSplittingPort - Inbound port for reconstructing per-project results
pub trait ResultSplittingPort {
    /// Reconstructs the per-project analyzer results from a merged file
    ///
    /// # Errors
    /// Returns an error if the merged file cannot be read or parsed, if a
    /// project references a package missing from the merged packages, or if a
    /// project has no recorded result file.
    fn split_results(&self, request: SplitRequest) -> Result<SplitResponse>;
}
