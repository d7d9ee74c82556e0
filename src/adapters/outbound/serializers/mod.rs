/// Serializer adapters implementing the structural result codec
mod json_serializer;
mod yaml_serializer;

pub use json_serializer::JsonSerializer;
pub use yaml_serializer::YamlSerializer;
