/// ProgressReporter port for status and warning messages
///
/// The analysis core never prints; everything a user should see while a
/// pass runs goes through this port.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress across several units of work
    ///
    /// # Arguments
    /// * `current` - Units completed so far
    /// * `total` - Total expected units
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
