use crate::shared::Result;
use std::path::Path;

/// File name of the Poetry lock file at a project root
pub const LOCKFILE_NAME: &str = "poetry.lock";

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// the poetry.lock file from a project directory.
pub trait LockfileReader {
    /// Reads the poetry.lock file from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing poetry.lock
    ///
    /// # Returns
    /// The raw content of the poetry.lock file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The poetry.lock file does not exist (`AnalysisError::LockfileNotFound`)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, project_path: &Path) -> Result<String>;
}
