use crate::shared::Result;
use std::path::Path;

/// ResultFileReader port for reading analyzer result files
///
/// This port abstracts the file system access needed to load per-project
/// analyzer results and merged results. Decoding is left to a
/// `ResultSerializer`.
pub trait ResultFileReader {
    /// Reads the raw content of a result file
    ///
    /// # Arguments
    /// * `path` - Path of the analyzer result or merged result file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file fails the safety checks (symlink, size limit)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_result_file(&self, path: &Path) -> Result<String>;
}
