use crate::ports::outbound::OutputPresenter;
use crate::shared::error::MergeError;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing serialized results to a file
///
/// By default the parent directory must already exist. Split output enables
/// `create_parents` so the provenance directory layout can be recreated.
pub struct FileSystemWriter {
    output_path: PathBuf,
    create_parents: bool,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            create_parents: false,
        }
    }

    /// Creates missing parent directories before writing
    pub fn with_parent_creation(mut self) -> Self {
        self.create_parents = true;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn prepare_parent_directory(&self) -> Result<()> {
        let Some(parent) = self.output_path.parent() else {
            return Ok(());
        };
        if parent == Path::new("") || parent.exists() {
            return Ok(());
        }

        if !self.create_parents {
            return Err(MergeError::FileWriteError {
                path: self.output_path.clone(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }

        fs::create_dir_all(parent).map_err(|e| {
            MergeError::FileWriteError {
                path: self.output_path.clone(),
                details: format!("Failed to create directory {}: {}", parent.display(), e),
            }
            .into()
        })
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.prepare_parent_directory()?;
        validate_output_target(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| MergeError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
