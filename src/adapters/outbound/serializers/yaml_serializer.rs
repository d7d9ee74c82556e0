use crate::merging::domain::{AnalyzerResult, MergedAnalyzerResult};
use crate::ports::outbound::ResultSerializer;
use crate::shared::Result;
use anyhow::Context;

/// YamlSerializer adapter encoding results as YAML documents
pub struct YamlSerializer;

impl YamlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSerializer for YamlSerializer {
    fn serialize_merged(&self, merged: &MergedAnalyzerResult) -> Result<String> {
        serde_yaml_ng::to_string(merged).context("Failed to serialize merged result to YAML")
    }

    fn deserialize_merged(&self, content: &str) -> Result<MergedAnalyzerResult> {
        serde_yaml_ng::from_str(content).context("Failed to parse merged result YAML")
    }

    fn serialize_analyzer_result(&self, result: &AnalyzerResult) -> Result<String> {
        serde_yaml_ng::to_string(result).context("Failed to serialize analyzer result to YAML")
    }

    fn deserialize_analyzer_result(&self, content: &str) -> Result<AnalyzerResult> {
        serde_yaml_ng::from_str(content).context("Failed to parse analyzer result YAML")
    }
}
