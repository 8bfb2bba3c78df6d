use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it never interferes with results on stdout.
/// Uses indicatif for the multi-project progress bar. In quiet mode only
/// warnings and errors are printed.
pub struct StderrProgressReporter {
    verbose: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            verbose: true,
            progress_bar: RefCell::new(None),
        }
    }

    /// A reporter that only prints warnings and errors
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            progress_bar: RefCell::new(None),
        }
    }

    pub fn with_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::new()
        } else {
            Self::quiet()
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if !self.verbose {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if self.verbose {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        assert!(reporter.is_verbose());
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(1, 2, Some("project-a"));
        reporter.report_progress(2, 2, None);
        reporter.report_error("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_quiet_reporter_skips_progress_bar() {
        let reporter = StderrProgressReporter::quiet();
        assert!(!reporter.is_verbose());
        reporter.report_progress(1, 3, Some("project-a"));
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_with_verbosity() {
        assert!(StderrProgressReporter::with_verbosity(true).is_verbose());
        assert!(!StderrProgressReporter::with_verbosity(false).is_verbose());
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
        assert!(reporter.is_verbose());
    }
}
