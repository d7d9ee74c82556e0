use analyzer_merge::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ResultFileReader serving file contents from memory
#[derive(Default)]
pub struct MockResultFileReader {
    pub files: HashMap<PathBuf, String>,
}

impl MockResultFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.files.insert(PathBuf::from(path), content.into());
        self
    }
}

impl ResultFileReader for MockResultFileReader {
    fn read_result_file(&self, path: &Path) -> Result<String> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock result file not found: {}", path.display()),
        }
    }
}
