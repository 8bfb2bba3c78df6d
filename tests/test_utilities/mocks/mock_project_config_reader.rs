use poetry_deps::prelude::*;
use std::path::Path;

/// Mock ProjectConfigReader for testing
pub struct MockProjectConfigReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockProjectConfigReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    /// Behaves like a project without pyproject.toml
    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn read_project_config(&self, _project_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock project config read failure");
        }
        Ok(self.content.clone())
    }
}
