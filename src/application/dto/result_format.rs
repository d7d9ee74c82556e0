use crate::shared::error::MergeError;
use crate::shared::Result;
use std::path::Path;

/// Serialization format of analyzer result and merged result files
///
/// Input files are decoded according to their extension; output uses the
/// format requested on the command line or in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultFormat {
    /// YAML (default)
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl ResultFormat {
    /// Determines the format from the file extension of `path`
    ///
    /// # Errors
    /// Returns `MergeError::UnsupportedFormat` for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| {
                MergeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }

    /// Preferred file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ResultFormat::Yaml => "yml",
            ResultFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ResultFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ResultFormat::Yaml),
            "json" => Ok(ResultFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'yaml' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultFormat::Yaml => write!(f, "yaml"),
            ResultFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    #[test]
    fn test_result_format_from_str() {
        assert_eq!(ResultFormat::from_str("yaml").unwrap(), ResultFormat::Yaml);
        assert_eq!(ResultFormat::from_str("YML").unwrap(), ResultFormat::Yaml);
        assert_eq!(ResultFormat::from_str("Json").unwrap(), ResultFormat::Json);
    }

    #[test]
    fn test_result_format_from_str_invalid() {
        let error = ResultFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
        assert!(error.contains("yaml"));
        assert!(error.contains("json"));
    }

    #[test]
    fn test_result_format_from_path() {
        assert_eq!(
            ResultFormat::from_path(&PathBuf::from("/a/analyzer-result.yml")).unwrap(),
            ResultFormat::Yaml
        );
        assert_eq!(
            ResultFormat::from_path(&PathBuf::from("merged.YAML")).unwrap(),
            ResultFormat::Yaml
        );
        assert_eq!(
            ResultFormat::from_path(&PathBuf::from("merged.json")).unwrap(),
            ResultFormat::Json
        );
    }

    #[test]
    fn test_result_format_from_path_unsupported() {
        let err = ResultFormat::from_path(&PathBuf::from("result.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported result file format"));
        assert!(ResultFormat::from_path(&PathBuf::from("result")).is_err());
    }

    #[test]
    fn test_result_format_display_and_extension() {
        assert_eq!(ResultFormat::Yaml.to_string(), "yaml");
        assert_eq!(ResultFormat::Json.to_string(), "json");
        assert_eq!(ResultFormat::Yaml.extension(), "yml");
        assert_eq!(ResultFormat::Json.extension(), "json");
        assert_eq!(ResultFormat::default(), ResultFormat::Yaml);
    }
}
