use crate::merging::domain::{AnalyzerResult, MergedAnalyzerResult};
use crate::ports::outbound::ResultSerializer;
use crate::shared::Result;
use anyhow::Context;

/// JsonSerializer adapter encoding results as pretty-printed JSON
///
/// Identifier-keyed maps become JSON objects keyed by the identifier's
/// textual form.
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSerializer for JsonSerializer {
    fn serialize_merged(&self, merged: &MergedAnalyzerResult) -> Result<String> {
        serde_json::to_string_pretty(merged).context("Failed to serialize merged result to JSON")
    }

    fn deserialize_merged(&self, content: &str) -> Result<MergedAnalyzerResult> {
        serde_json::from_str(content).context("Failed to parse merged result JSON")
    }

    fn serialize_analyzer_result(&self, result: &AnalyzerResult) -> Result<String> {
        serde_json::to_string_pretty(result).context("Failed to serialize analyzer result to JSON")
    }

    fn deserialize_analyzer_result(&self, content: &str) -> Result<AnalyzerResult> {
        serde_json::from_str(content).context("Failed to parse analyzer result JSON")
    }
}
