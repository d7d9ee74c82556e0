/// Adapters layer - file system, serialization and console implementations
/// of the outbound ports
pub mod outbound;
