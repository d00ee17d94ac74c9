/// ProgressReporter port for user-facing status output
///
/// Status lines and the photo decoding progress go through this port so the
/// use cases never print directly.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports progress through a counted batch of work
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Items in the batch
    /// * `message` - Optional label for the batch
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a non-fatal error
    fn report_error(&self, message: &str);

    /// Reports that a stage finished
    fn report_completion(&self, message: &str);
}
