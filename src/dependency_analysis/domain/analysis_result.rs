use super::PackageNode;
use serde::Serialize;

/// Ecosystem tag of an analyzed application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Poetry,
}

impl std::fmt::Display for AppType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppType::Poetry => write!(f, "poetry"),
        }
    }
}

/// Packages found in one lock file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    #[serde(rename = "type")]
    app_type: AppType,
    file_path: String,
    packages: Vec<PackageNode>,
}

impl Application {
    pub fn new(app_type: AppType, file_path: impl Into<String>, packages: Vec<PackageNode>) -> Self {
        Self {
            app_type,
            file_path: file_path.into(),
            packages,
        }
    }

    pub fn app_type(&self) -> AppType {
        self.app_type
    }

    /// Lock file path relative to the analyzed root
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn packages(&self) -> &[PackageNode] {
        &self.packages
    }

    pub fn package(&self, id: &str) -> Option<&PackageNode> {
        self.packages.iter().find(|pkg| pkg.id() == id)
    }
}

/// Everything one analysis pass reports.
///
/// Empty when no lock file was found or the one found could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    applications: Vec<Application>,
}

impl AnalysisResult {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn package_count(&self) -> usize {
        self.applications.iter().map(|app| app.packages().len()).sum()
    }

    /// Appends the applications of another pass, keeping their order.
    pub fn merge(&mut self, other: AnalysisResult) {
        self.applications.extend(other.applications);
    }
}
