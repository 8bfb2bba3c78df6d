use super::{GraphBuilder, GroupFilter, OutputAssembler, RelationshipClassifier};
use crate::dependency_analysis::domain::{Application, LockedEntry, ManifestSets};

/// Counters describing one analysis pass, for progress reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    pub locked: usize,
    pub direct: usize,
    pub excluded: usize,
    pub edges: usize,
}

/// DependencyAnalyzer runs the graph pipeline over already-parsed input:
/// build, classify, filter, assemble.
///
/// This service contains pure business logic. It has no I/O dependencies and
/// works only with domain objects, so it is safe to call from any thread.
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    /// Analyzes lock entries against the manifest sets.
    ///
    /// # Arguments
    /// * `entries` - Records from the lock file
    /// * `manifest` - Group membership from the project descriptor (empty when unavailable)
    /// * `file_path` - Lock file path to report in the result
    pub fn analyze(
        entries: &[LockedEntry],
        manifest: &ManifestSets,
        file_path: &str,
    ) -> (Application, AnalysisStats) {
        let mut graph = GraphBuilder::build(entries);
        let direct = RelationshipClassifier::classify(&mut graph, manifest);

        let locked = graph.len();
        let graph = GroupFilter::apply(graph, manifest);
        let stats = AnalysisStats {
            locked,
            direct,
            excluded: locked - graph.len(),
            edges: graph.edge_count(),
        };

        (OutputAssembler::assemble(graph, file_path), stats)
    }
}
