//! poetry-deps - dependency graph analysis for Poetry projects
//!
//! Reads a project's `poetry.lock` and `pyproject.toml` and reports every
//! locked package with its dependency edges, whether the project asks for it
//! directly, and with development-only packages filtered out.
//!
//! # Architecture
//!
//! The library follows a hexagonal layout:
//!
//! - **Domain Layer** (`dependency_analysis`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use poetry_deps::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = AnalyzeProjectUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(AnalysisRequest::new("."))?;
//!
//! let output = JsonFormatter::new().format(&response.result)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::AnalyzeProjectUseCase;
    pub use crate::dependency_analysis::domain::{
        AnalysisResult, AppType, Application, LockedEntry, ManifestSets, NormalizedName,
        PackageNode, Relationship,
    };
    pub use crate::dependency_analysis::services::{
        AnalysisStats, DependencyAnalyzer, LockRecordParser, ManifestReader,
    };
    pub use crate::ports::outbound::{
        AnalysisFormatter, LockfileReader, OutputPresenter, ProgressReporter, ProjectConfigReader,
        LOCKFILE_NAME, PYPROJECT_NAME,
    };
    pub use crate::shared::error::{AnalysisError, ExitCode};
    pub use crate::shared::Result;
}
