use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where serialized results are written.
pub trait OutputPresenter {
    /// Presents the serialized content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination fails the safety checks
    fn present(&self, content: &str) -> Result<()>;
}
