use crate::shared::error::MergeError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maximum size of a result file that will be read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file, not a symbolic link, and not larger
/// than `max_size` bytes.
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
pub fn validate_result_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| MergeError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read file metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(MergeError::SecurityError {
            path: path.to_path_buf(),
            reason: "The file is a symbolic link".to_string(),
            hint: "Pass the path of the analyzer result file itself".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(MergeError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(MergeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "The file is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Check that the file really is an analyzer result".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Rejects an existing output path that is a symbolic link.
///
/// A missing path is fine; it will be created by the writer.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(MergeError::SecurityError {
            path: path.to_path_buf(),
            reason: "The output path is a symbolic link".to_string(),
            hint: "Write to a regular file path instead".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Turns a recorded provenance path into a path relative to an output directory
///
/// Root and drive prefixes are dropped so `/module/result.yml` becomes
/// `module/result.yml`. Paths containing `..` are rejected, as they could
/// escape the output directory.
pub fn provenance_relative_path(source_file: &str) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(source_file).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                return Err(MergeError::SecurityError {
                    path: PathBuf::from(source_file),
                    reason: "The recorded result file path contains '..'".to_string(),
                    hint: "Re-create the merged result from the original analyzer result files"
                        .to_string(),
                }
                .into())
            }
            Component::Normal(part) => relative.push(part),
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(MergeError::Validation {
            message: format!("Recorded result file path '{}' has no file name", source_file),
        }
        .into());
    }

    Ok(relative)
}
