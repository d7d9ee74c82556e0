use crate::ports::outbound::ResultFileReader;
use crate::shared::error::MergeError;
use crate::shared::security::{validate_result_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading result files from the file system
///
/// Every file passes the safety checks in `shared::security` before it is read.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Overrides the maximum accepted file size in bytes
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFileReader for FileSystemReader {
    fn read_result_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(MergeError::ResultFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path, or run the analyzer for this project first.".to_string(),
            }
            .into());
        }

        validate_result_file(path, self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            MergeError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
