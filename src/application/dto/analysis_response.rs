use crate::dependency_analysis::domain::AnalysisResult;
use crate::dependency_analysis::services::AnalysisStats;

/// AnalysisResponse - Internal response DTO from the analyze-project use case
///
/// `stats` is `None` when nothing was analyzed (no lock file, or one that
/// could not be parsed); `result` is empty in that case.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResponse {
    pub result: AnalysisResult,
    pub stats: Option<AnalysisStats>,
}

impl AnalysisResponse {
    pub fn new(result: AnalysisResult, stats: Option<AnalysisStats>) -> Self {
        Self { result, stats }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn was_analyzed(&self) -> bool {
        self.stats.is_some()
    }
}
