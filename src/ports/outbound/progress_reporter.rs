/// ProgressReporter port for status output while merging or splitting
///
/// All human-facing diagnostics go through this port so they never mix with
/// serialized output written to stdout.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports that `current` of `total` result files have been processed
    ///
    /// # Arguments
    /// * `current` - Number of files processed so far
    /// * `total` - Total number of files
    /// * `message` - Optional label, usually the file just processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem, e.g. a project registered twice
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
