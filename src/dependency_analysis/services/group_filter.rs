use crate::dependency_analysis::domain::{DependencyGraph, ManifestSets};
use crate::dependency_analysis::policies::GroupPolicy;
use std::collections::VecDeque;

/// GroupFilter removes development-only packages from the graph.
///
/// A package is removed when it is declared only in the reserved dev group
/// (or tagged `dev` by a legacy lock file), or when it is locked solely to
/// satisfy such a package. Anything still required by a kept package stays.
pub struct GroupFilter;

impl GroupFilter {
    /// Applies the filter and returns the surviving graph.
    ///
    /// Seeds (dev-only packages) are always removed. Roots are every package
    /// the seeds do not pull in, plus pulled-in packages the project declares
    /// itself (main table or another group) or the lock file marks as
    /// non-dev. Survivors are the packages reachable from a root without
    /// passing through a seed.
    pub fn apply(graph: DependencyGraph, manifest: &ManifestSets) -> DependencyGraph {
        let seeds: Vec<bool> = (0..graph.len())
            .map(|idx| {
                manifest.is_dev_only(graph.normalized_name(idx))
                    || graph
                        .lock_group(idx)
                        .is_some_and(GroupPolicy::is_excluded_group)
            })
            .collect();

        if !seeds.contains(&true) {
            return graph;
        }

        let seed_indices = (0..graph.len()).filter(|&idx| seeds[idx]);
        let pulled_in_by_dev = Self::reachable(&graph, seed_indices, |_| true);

        let roots = (0..graph.len()).filter(|&idx| {
            !seeds[idx]
                && (!pulled_in_by_dev[idx]
                    || manifest.is_declared_root(graph.normalized_name(idx))
                    || graph
                        .lock_group(idx)
                        .is_some_and(GroupPolicy::is_retained_group))
        });
        let keep = Self::reachable(&graph, roots, |idx| !seeds[idx]);

        graph.retain(|idx| keep[idx])
    }

    /// Breadth-first walk from `starts`, entering only nodes accepted by
    /// `can_enter`. Start nodes are marked unconditionally.
    fn reachable<I, F>(graph: &DependencyGraph, starts: I, can_enter: F) -> Vec<bool>
    where
        I: IntoIterator<Item = usize>,
        F: Fn(usize) -> bool,
    {
        let mut visited = vec![false; graph.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for start in starts {
            if !visited[start] {
                visited[start] = true;
                queue.push_back(start);
            }
        }

        while let Some(idx) = queue.pop_front() {
            for &next in graph.dependencies_of(idx) {
                if !visited[next] && can_enter(next) {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_analysis::domain::{LockedDependency, LockedEntry, NormalizedName};
    use crate::dependency_analysis::services::GraphBuilder;
    use std::collections::HashSet;

    fn set(names: &[&str]) -> HashSet<NormalizedName> {
        names.iter().map(|n| NormalizedName::new(n)).collect()
    }

    fn entry(name: &str, deps: &[&str]) -> LockedEntry {
        LockedEntry::new(
            name,
            "1.0.0",
            deps.iter().map(|d| LockedDependency::new(*d, None)).collect(),
            None,
        )
    }

    fn names_of(graph: DependencyGraph) -> Vec<String> {
        graph
            .into_packages()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn test_no_dev_group_keeps_everything() {
        let graph = GraphBuilder::build(&[
            entry("requests", &["idna"]),
            entry("idna", &[]),
            entry("orphan", &[]),
        ]);
        let manifest = ManifestSets::new(set(&["requests"]), set(&[]), set(&[]));

        let filtered = GroupFilter::apply(graph, &manifest);
        assert_eq!(names_of(filtered), vec!["requests", "idna", "orphan"]);
    }

    #[test]
    fn test_dev_package_and_exclusive_dependencies_removed() {
        let graph = GraphBuilder::build(&[
            entry("requests", &["idna"]),
            entry("idna", &[]),
            entry("pytest", &["pluggy", "iniconfig"]),
            entry("pluggy", &[]),
            entry("iniconfig", &[]),
        ]);
        let manifest = ManifestSets::new(set(&["requests"]), set(&["pytest"]), set(&[]));

        let filtered = GroupFilter::apply(graph, &manifest);
        assert_eq!(names_of(filtered), vec!["requests", "idna"]);
    }

    #[test]
    fn test_shared_dependency_retained() {
        let graph = GraphBuilder::build(&[
            entry("requests", &["urllib3"]),
            entry("urllib3", &[]),
            entry("pytest-httpserver", &["urllib3", "werkzeug"]),
            entry("werkzeug", &[]),
        ]);
        let manifest = ManifestSets::new(set(&["requests"]), set(&["pytest-httpserver"]), set(&[]));

        let filtered = GroupFilter::apply(graph, &manifest);
        assert_eq!(names_of(filtered), vec!["requests", "urllib3"]);
    }

    #[test]
    fn test_declared_package_pulled_in_by_dev_is_kept() {
        let graph = GraphBuilder::build(&[
            entry("pytest", &["packaging"]),
            entry("packaging", &[]),
            entry("ruff", &[]),
        ]);
        let manifest = ManifestSets::new(set(&["packaging"]), set(&["pytest"]), set(&["ruff"]));

        let filtered = GroupFilter::apply(graph, &manifest);
        assert_eq!(names_of(filtered), vec!["packaging", "ruff"]);
    }

    #[test]
    fn test_edges_to_removed_nodes_dropped() {
        let graph = GraphBuilder::build(&[
            entry("app-plugin", &["pytest", "attrs"]),
            entry("pytest", &[]),
            entry("attrs", &[]),
        ]);
        let manifest = ManifestSets::new(set(&["app-plugin"]), set(&["pytest"]), set(&[]));

        let packages = GroupFilter::apply(graph, &manifest).into_packages();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].depends_on(), ["attrs@1.0.0"]);
    }

    #[test]
    fn test_legacy_dev_category_without_manifest() {
        let graph = GraphBuilder::build(&[
            entry("click", &[]),
            LockedEntry::new(
                "pytest",
                "7.2.0",
                vec![LockedDependency::new("pluggy", None)],
                Some("dev".to_string()),
            ),
            entry("pluggy", &[]),
        ]);

        let filtered = GroupFilter::apply(graph, &ManifestSets::default());
        assert_eq!(names_of(filtered), vec!["click"]);
    }

    #[test]
    fn test_legacy_main_category_required_by_dev_is_kept() {
        let graph = GraphBuilder::build(&[
            LockedEntry::new("requests", "2.28.1", vec![], Some("main".to_string())),
            LockedEntry::new(
                "responses",
                "0.22.0",
                vec![LockedDependency::new("requests", None)],
                Some("dev".to_string()),
            ),
        ]);

        let filtered = GroupFilter::apply(graph, &ManifestSets::default());
        assert_eq!(names_of(filtered), vec!["requests"]);
    }

    #[test]
    fn test_lock_groups_list_keeps_shared_main_package() {
        let graph = GraphBuilder::build(&[
            LockedEntry::new(
                "pytest",
                "8.3.4",
                vec![
                    LockedDependency::new("packaging", None),
                    LockedDependency::new("pluggy", None),
                ],
                Some("dev".to_string()),
            ),
            LockedEntry::new("packaging", "24.2", vec![], Some("main".to_string())),
            LockedEntry::new("pluggy", "1.5.0", vec![], Some("dev".to_string())),
        ]);

        let filtered = GroupFilter::apply(graph, &ManifestSets::default());
        assert_eq!(names_of(filtered), vec!["packaging"]);
    }

    #[test]
    fn test_dev_cycle_removed() {
        let graph = GraphBuilder::build(&[
            entry("main-lib", &[]),
            entry("sphinx", &["sphinxcontrib-x"]),
            entry("sphinxcontrib-x", &["sphinx"]),
        ]);
        let manifest = ManifestSets::new(set(&["main-lib"]), set(&["sphinx"]), set(&[]));

        let filtered = GroupFilter::apply(graph, &manifest);
        assert_eq!(names_of(filtered), vec!["main-lib"]);
    }
}
