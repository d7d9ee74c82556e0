use crate::merging::domain::{AnalyzerResult, MergedAnalyzerResult};
use crate::shared::Result;

/// ResultSerializer port for encoding and decoding results
///
/// Implementations must be faithful structural codecs: decoding the encoding
/// of a value yields an equal value.
pub trait ResultSerializer {
    fn serialize_merged(&self, merged: &MergedAnalyzerResult) -> Result<String>;

    fn deserialize_merged(&self, content: &str) -> Result<MergedAnalyzerResult>;

    fn serialize_analyzer_result(&self, result: &AnalyzerResult) -> Result<String>;

    fn deserialize_analyzer_result(&self, content: &str) -> Result<AnalyzerResult>;
}
