/// Merging domain - pure data model, merge services and policies
///
/// Nothing in this module performs I/O; files are read and written through
/// the ports implemented in `adapters`.
pub mod domain;
pub mod policies;
pub mod services;
