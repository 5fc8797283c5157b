/// ProgressReporter port for user feedback during a run
///
/// Messages go to the operator (stderr in the CLI), never into the
/// generated artifacts.
pub trait ProgressReporter {
    /// Reports an informational step
    fn report(&self, message: &str);

    /// Reports progress of license text resolution
    ///
    /// # Arguments
    /// * `current` - Number of license ids resolved so far
    /// * `total` - Number of distinct license ids
    /// * `message` - Optional detail, usually the license id just resolved
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a recoverable error
    fn report_error(&self, message: &str);

    /// Reports completion of a phase
    fn report_completion(&self, message: &str);
}
