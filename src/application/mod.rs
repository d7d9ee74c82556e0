/// Application layer - merge and split use cases
///
/// Use cases read result files through ports, drive the merge builder and
/// hand serialized output back to the caller.
pub mod dto;
pub mod factories;
pub mod use_cases;
