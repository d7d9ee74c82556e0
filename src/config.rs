//! Configuration file support for analyzer-merge.
//!
//! Provides YAML-based configuration through `analyzer-merge.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::ResultFormat;
use crate::merging::policies::PackageConflictPolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "analyzer-merge.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub allow_dynamic_versions: Option<bool>,
    pub package_conflicts: Option<PackageConflictPolicy>,
    pub fail_on_errors: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Output format from the config, if one is set
    pub fn result_format(&self) -> Result<Option<ResultFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<ResultFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.result_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Set 'format' to 'yaml' or 'json'.",
            e
        );
    }
    Ok(())
}

/// Warnings for unknown fields in the config file, sorted by field name.
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("Unknown config field '{}' will be ignored.", key))
        .collect()
}
