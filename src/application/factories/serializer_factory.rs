use crate::adapters::outbound::serializers::{JsonSerializer, YamlSerializer};
use crate::application::dto::ResultFormat;
use crate::ports::outbound::ResultSerializer;

/// Factory for creating result serializers
///
/// Selects the serializer adapter for a `ResultFormat`, keeping adapter
/// selection out of the use cases.
pub struct SerializerFactory;

impl SerializerFactory {
    /// Creates a serializer for the specified format
    ///
    /// # Examples
    /// ```
    /// use analyzer_merge::application::dto::ResultFormat;
    /// use analyzer_merge::application::factories::SerializerFactory;
    ///
    /// let serializer = SerializerFactory::create(ResultFormat::Yaml);
    /// ```
    pub fn create(format: ResultFormat) -> Box<dyn ResultSerializer> {
        match format {
            ResultFormat::Yaml => Box::new(YamlSerializer::new()),
            ResultFormat::Json => Box::new(JsonSerializer::new()),
        }
    }

    /// Returns the progress message shown before writing output in `format`
    ///
    /// # Examples
    /// ```
    /// use analyzer_merge::application::dto::ResultFormat;
    /// use analyzer_merge::application::factories::SerializerFactory;
    ///
    /// let message = SerializerFactory::progress_message(ResultFormat::Json);
    /// assert_eq!(message, "📝 Writing merged result as JSON...");
    /// ```
    pub fn progress_message(format: ResultFormat) -> &'static str {
        match format {
            ResultFormat::Yaml => "📝 Writing merged result as YAML...",
            ResultFormat::Json => "📝 Writing merged result as JSON...",
        }
    }
}
