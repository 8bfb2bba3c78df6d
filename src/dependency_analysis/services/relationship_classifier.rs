use crate::dependency_analysis::domain::{DependencyGraph, ManifestSets, Relationship};

/// RelationshipClassifier tags nodes Direct / Indirect from the manifest.
///
/// Classification is driven by the project descriptor, not by graph
/// reachability: a package listed in the main table is Direct even when some
/// other package also requires it.
pub struct RelationshipClassifier;

impl RelationshipClassifier {
    /// Classifies every node in place.
    ///
    /// With no usable manifest information every node stays `Unknown`.
    /// Returns the number of Direct nodes.
    pub fn classify(graph: &mut DependencyGraph, manifest: &ManifestSets) -> usize {
        if !manifest.is_classifiable() {
            return 0;
        }

        let mut direct_count = 0;
        for idx in 0..graph.len() {
            let relationship = if manifest.is_direct(graph.normalized_name(idx)) {
                direct_count += 1;
                Relationship::Direct
            } else {
                Relationship::Indirect
            };
            graph.node_mut(idx).set_relationship(relationship);
        }

        direct_count
    }
}
