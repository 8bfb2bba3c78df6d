use crate::dependency_analysis::domain::AnalysisResult;
use crate::ports::outbound::AnalysisFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the result as pretty-printed JSON
///
/// Field names follow the domain types' serde attributes:
/// `applications[].type`, `file_path`, `packages[]`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisFormatter for JsonFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let mut json = serde_json::to_string_pretty(result)?;
        json.push('\n');
        Ok(json)
    }
}
