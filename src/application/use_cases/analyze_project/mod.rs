use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::dependency_analysis::domain::{AnalysisResult, ManifestSets};
use crate::dependency_analysis::services::{DependencyAnalyzer, LockRecordParser, ManifestReader};
use crate::ports::outbound::{LockfileReader, ProgressReporter, ProjectConfigReader, LOCKFILE_NAME};
use crate::shared::error::AnalysisError;
use crate::shared::Result;

/// AnalyzeProjectUseCase - Core use case for dependency analysis
///
/// Reads `poetry.lock` and `pyproject.toml` through the injected ports and
/// runs the domain pipeline over them.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeProjectUseCase<LR, PCR, PR> {
    lockfile_reader: LR,
    project_config_reader: PCR,
    progress_reporter: PR,
}

impl<LR, PCR, PR> AnalyzeProjectUseCase<LR, PCR, PR>
where
    LR: LockfileReader,
    PCR: ProjectConfigReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeProjectUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, project_config_reader: PCR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            project_config_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis for one project directory
    ///
    /// A missing or unparsable lock file yields an empty result. A lock file
    /// that exists but cannot be read is an error.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Read the lock file
        let Some(content) = self.read_lockfile(&request)? else {
            return Ok(AnalysisResponse::empty());
        };

        // Step 2: Parse lock records
        let entries = match LockRecordParser::parse(&content) {
            Ok(entries) => entries,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {}",
                    AnalysisError::LockfileParseError {
                        path: request.project_path.join(LOCKFILE_NAME),
                        details: format!("{:#}", e),
                    }
                ));
                return Ok(AnalysisResponse::empty());
            }
        };
        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", entries.len()));

        // Step 3: Read the project descriptor (best effort)
        let manifest = self.read_manifest(&request);

        // Step 4: Build, classify, filter, assemble
        self.progress_reporter
            .report("🔗 Resolving dependency graph...");
        let (application, stats) = DependencyAnalyzer::analyze(&entries, &manifest, LOCKFILE_NAME);

        if stats.excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} development-only package(s)",
                stats.excluded
            ));
        }
        self.progress_reporter.report(&format!(
            "✅ {} package(s), {} direct, {} dependency edge(s)",
            application.packages().len(),
            stats.direct,
            stats.edges
        ));

        Ok(AnalysisResponse::new(
            AnalysisResult::new(vec![application]),
            Some(stats),
        ))
    }

    /// Returns `None` when the project has no lock file or the reader could
    /// not decode it.
    fn read_lockfile(&self, request: &AnalysisRequest) -> Result<Option<String>> {
        self.progress_reporter.report(&format!(
            "📖 Loading poetry.lock file from: {}",
            request.project_path.display()
        ));

        match self.lockfile_reader.read_lockfile(&request.project_path) {
            Ok(content) => Ok(Some(content)),
            Err(e)
                if e.downcast_ref::<AnalysisError>()
                    .is_some_and(AnalysisError::is_lockfile_missing) =>
            {
                self.progress_reporter.report(&format!(
                    "ℹ️  No poetry.lock found in {}, nothing to analyze",
                    request.project_path.display()
                ));
                Ok(None)
            }
            Err(e)
                if e.downcast_ref::<AnalysisError>()
                    .is_some_and(AnalysisError::is_lockfile_unparsable) =>
            {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", e));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Falls back to empty sets when the descriptor is missing or unusable,
    /// which leaves every package unclassified and skips group filtering.
    fn read_manifest(&self, request: &AnalysisRequest) -> ManifestSets {
        let content = match self
            .project_config_reader
            .read_project_config(&request.project_path)
        {
            Ok(content) => content,
            Err(e) => {
                self.progress_reporter.report(&format!(
                    "ℹ️  Skipping relationship detection: {}",
                    e
                ));
                return ManifestSets::default();
            }
        };

        match ManifestReader::parse(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Ignoring pyproject.toml: {:#}",
                    e
                ));
                ManifestSets::default()
            }
        }
    }
}
