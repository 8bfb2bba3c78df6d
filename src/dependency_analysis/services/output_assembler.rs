use crate::dependency_analysis::domain::{AppType, Application, DependencyGraph};

/// OutputAssembler orders the surviving packages and wraps them into an
/// `Application`.
pub struct OutputAssembler;

impl OutputAssembler {
    /// Sorts packages by name, then version (plain string order), so the
    /// output does not depend on lock-file order.
    pub fn assemble(graph: DependencyGraph, file_path: &str) -> Application {
        let mut packages = graph.into_packages();
        packages.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.version().cmp(b.version()))
        });

        Application::new(AppType::Poetry, file_path, packages)
    }
}
