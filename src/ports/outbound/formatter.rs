use crate::dependency_analysis::domain::AnalysisResult;
use crate::shared::Result;

/// AnalysisFormatter port for rendering an analysis result
///
/// Implemented once per output format (JSON, plain text).
pub trait AnalysisFormatter {
    /// Renders the result as a string ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, result: &AnalysisResult) -> Result<String>;
}
