use crate::merging::domain::Identifier;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - results merged or split without problems
    Success = 0,
    /// The merged result carries analyzer errors and `--fail-on-errors` was given
    AnalyzerErrorsFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, inconsistent data, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AnalyzerErrorsFound => write!(f, "Analyzer Errors Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for merging and splitting analyzer results.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Analyzer result file not found: {path}\n\n💡 Hint: {suggestion}")]
    ResultFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse analyzer result file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was written by a compatible analyzer")]
    ResultParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the root directory of the analyzed repository")]
    InvalidRepositoryPath { path: PathBuf, reason: String },

    #[error("Unsupported result file format: {path}\n\n💡 Hint: Use a '.yml', '.yaml' or '.json' file extension")]
    UnsupportedFormat { path: PathBuf },

    #[error("Conflicting metadata for package {package}: '{first_file}' and '{second_file}' disagree\n\n💡 Hint: Re-run the analyzers or merge with the 'keep_first' conflict policy")]
    ConflictingPackage {
        package: Identifier,
        first_file: String,
        second_file: String,
    },

    #[error("Project {project} references package {package}, which is missing from the merged packages")]
    UnresolvedPackageReference {
        project: Identifier,
        package: Identifier,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
