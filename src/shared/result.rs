/// Result alias used throughout the crate; errors are `anyhow::Error` so
/// typed `MergeError`s and added context travel together.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
