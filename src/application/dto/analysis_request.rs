use std::path::PathBuf;

/// AnalysisRequest - Internal request DTO for the analyze-project use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Project root expected to hold `poetry.lock` and `pyproject.toml`
    pub project_path: PathBuf,
}

impl AnalysisRequest {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }
}
