use crate::shared::Result;
use std::path::Path;

/// File name of the project descriptor next to the lock file
pub const PYPROJECT_NAME: &str = "pyproject.toml";

/// ProjectConfigReader port for reading the project descriptor
pub trait ProjectConfigReader {
    /// Reads the raw pyproject.toml content from the project directory
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read.
    /// Callers treat any error as "no descriptor available".
    fn read_project_config(&self, project_path: &Path) -> Result<String>;
}
