use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    /// Single output file whose parent directory must exist
    File(PathBuf),
    /// Output file inside a directory tree that is created on demand
    TreeFile(PathBuf),
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use analyzer_merge::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
            PresenterType::TreeFile(path) => {
                Box::new(FileSystemWriter::new(path).with_parent_creation())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_presenter_requires_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/merged.yml");
        let presenter = PresenterFactory::create(PresenterType::File(path));
        assert!(presenter.present("x").is_err());
    }

    #[test]
    fn test_tree_file_presenter_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("module/analyzer-result.yml");
        let presenter = PresenterFactory::create(PresenterType::TreeFile(path.clone()));
        presenter.present("x").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "x");
    }

    #[test]
    fn test_presenter_type_equality() {
        let file1 = PresenterType::File(PathBuf::from("/tmp/merged.yml"));
        let file2 = PresenterType::File(PathBuf::from("/tmp/merged.yml"));
        assert_eq!(file1, file2);
        assert_ne!(file1, PresenterType::TreeFile(PathBuf::from("/tmp/merged.yml")));
        assert_eq!(PresenterType::Stdout, PresenterType::Stdout);
    }
}
