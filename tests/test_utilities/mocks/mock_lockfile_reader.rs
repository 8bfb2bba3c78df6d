use poetry_deps::prelude::*;
use std::path::Path;

/// Mock LockfileReader for testing
pub struct MockLockfileReader {
    pub content: String,
    pub missing: bool,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            missing: false,
            should_fail: false,
        }
    }

    /// Behaves like a project without poetry.lock
    pub fn missing() -> Self {
        Self {
            content: String::new(),
            missing: true,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            missing: false,
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<String> {
        if self.missing {
            return Err(AnalysisError::LockfileNotFound {
                path: project_path.join(LOCKFILE_NAME),
                suggestion: "Mock lockfile is missing".to_string(),
            }
            .into());
        }
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        Ok(self.content.clone())
    }
}
