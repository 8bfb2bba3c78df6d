use crate::ports::outbound::{LockfileReader, ProjectConfigReader, LOCKFILE_NAME, PYPROJECT_NAME};
use crate::shared::error::AnalysisError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both LockfileReader and ProjectConfigReader ports,
/// reading `poetry.lock` and `pyproject.toml` from a project root.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a whole file after rejecting symlinks, non-regular files and
    /// files over `MAX_FILE_SIZE`. Decoding is left to the caller.
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<Vec<u8>> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path).map_err(|e| AnalysisError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read {} metadata: {}", file_type, e),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            AnalysisError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<String> {
        let lockfile_path = project_path.join(LOCKFILE_NAME);

        if !lockfile_path.exists() {
            return Err(AnalysisError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "poetry.lock does not exist in project directory \"{}\".\n   \
                     Run `poetry lock` first, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let bytes = self.safe_read_file(&lockfile_path, LOCKFILE_NAME)?;
        // Undecodable content is a malformed lock file, not an I/O failure.
        String::from_utf8(bytes).map_err(|e| {
            AnalysisError::LockfileParseError {
                path: lockfile_path,
                details: format!("content is not valid UTF-8: {}", e.utf8_error()),
            }
            .into()
        })
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn read_project_config(&self, project_path: &Path) -> Result<String> {
        let pyproject_path = project_path.join(PYPROJECT_NAME);

        if !pyproject_path.exists() {
            anyhow::bail!("pyproject.toml not found in project directory");
        }

        let bytes = self.safe_read_file(&pyproject_path, PYPROJECT_NAME)?;
        String::from_utf8(bytes).map_err(|e| {
            AnalysisError::FileReadError {
                path: pyproject_path,
                details: format!("content is not valid UTF-8: {}", e.utf8_error()),
            }
            .into()
        })
    }
}
