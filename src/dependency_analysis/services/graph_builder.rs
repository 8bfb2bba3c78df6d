use crate::dependency_analysis::domain::{DependencyGraph, LockedDependency, LockedEntry};

/// GraphBuilder wires lock entries into a `DependencyGraph`.
///
/// Pure function of its input; no I/O.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds one node per entry (same order as `entries`) and resolves every
    /// requirement name against the packages locked in the same file.
    ///
    /// Requirements naming a package that is not locked here (platform or
    /// extra-conditional packages, or packages the lock tool left out) are
    /// dropped.
    pub fn build(entries: &[LockedEntry]) -> DependencyGraph {
        let mut graph = DependencyGraph::with_capacity(entries.len());
        for entry in entries {
            graph.add_node(entry);
        }

        for (idx, entry) in entries.iter().enumerate() {
            for dependency in entry.dependencies() {
                if let Some(target) = Self::resolve(&graph, dependency) {
                    graph.add_edge(idx, target);
                }
            }
        }

        graph
    }

    /// Picks the locked node a requirement refers to.
    ///
    /// The lock file's own version is authoritative. When the same name is
    /// locked more than once, an exact pin on the requirement selects the
    /// matching version; otherwise the first occurrence in the file wins.
    fn resolve(graph: &DependencyGraph, dependency: &LockedDependency) -> Option<usize> {
        match graph.candidates(&dependency.normalized_name()) {
            [] => None,
            [only] => Some(*only),
            candidates => dependency
                .pinned_version()
                .and_then(|pinned| {
                    candidates
                        .iter()
                        .copied()
                        .find(|&idx| graph.node(idx).version() == pinned)
                })
                .or_else(|| candidates.first().copied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, constraint: &str) -> LockedDependency {
        LockedDependency::new(name, Some(constraint.to_string()))
    }

    fn entry(name: &str, version: &str, deps: Vec<LockedDependency>) -> LockedEntry {
        LockedEntry::new(name, version, deps, None)
    }

    #[test]
    fn test_build_resolves_normalized_names() {
        let entries = vec![
            entry(
                "flask",
                "1.1.4",
                vec![dep("Jinja2", ">=2.10.1,<3.0"), dep("Werkzeug", ">=0.15,<2.0")],
            ),
            entry("jinja2", "2.11.3", vec![dep("MarkupSafe", ">=0.23")]),
            entry("markupsafe", "2.1.2", vec![]),
            entry("werkzeug", "1.0.1", vec![]),
        ];

        let packages = GraphBuilder::build(&entries).into_packages();
        assert_eq!(packages[0].depends_on(), ["jinja2@2.11.3", "werkzeug@1.0.1"]);
        assert_eq!(packages[1].depends_on(), ["markupsafe@2.1.2"]);
        assert!(packages[2].depends_on().is_empty());
    }

    #[test]
    fn test_build_drops_unknown_dependencies() {
        let entries = vec![
            entry("click", "8.1.3", vec![dep("colorama", "*"), dep("importlib-metadata", "*")]),
            entry("colorama", "0.4.6", vec![]),
        ];

        let graph = GraphBuilder::build(&entries);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.into_packages()[0].depends_on(), ["colorama@0.4.6"]);
    }

    #[test]
    fn test_build_drops_self_edges() {
        let entries = vec![entry("weird", "1.0", vec![dep("Weird", "*")])];

        let graph = GraphBuilder::build(&entries);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_build_handles_cycles() {
        let entries = vec![
            entry("a", "1.0", vec![dep("b", "*")]),
            entry("b", "1.0", vec![dep("a", "*")]),
        ];

        let packages = GraphBuilder::build(&entries).into_packages();
        assert_eq!(packages[0].depends_on(), ["b@1.0"]);
        assert_eq!(packages[1].depends_on(), ["a@1.0"]);
    }

    #[test]
    fn test_multiple_versions_prefer_exact_pin() {
        let entries = vec![
            entry("app-a", "1.0", vec![dep("numpy", "1.26.4")]),
            entry("app-b", "1.0", vec![dep("numpy", ">=1.21")]),
            entry("numpy", "1.24.4", vec![]),
            entry("numpy", "1.26.4", vec![]),
        ];

        let packages = GraphBuilder::build(&entries).into_packages();
        assert_eq!(packages[0].depends_on(), ["numpy@1.26.4"]);
        assert_eq!(packages[1].depends_on(), ["numpy@1.24.4"]);
        assert_eq!(packages[2].id(), "numpy@1.24.4");
        assert_eq!(packages[3].id(), "numpy@1.26.4");
    }

    #[test]
    fn test_build_empty() {
        assert!(GraphBuilder::build(&[]).is_empty());
    }
}
