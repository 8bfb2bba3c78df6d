pub mod analysis_result;
pub mod dependency_graph;
pub mod locked_entry;
pub mod manifest;
pub mod package_name;
pub mod package_node;

pub use analysis_result::{AnalysisResult, AppType, Application};
pub use dependency_graph::DependencyGraph;
pub use locked_entry::{LockedDependency, LockedEntry};
pub use manifest::ManifestSets;
pub use package_name::NormalizedName;
pub use package_node::{PackageNode, Relationship};
