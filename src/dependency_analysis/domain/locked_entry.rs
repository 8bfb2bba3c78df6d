use super::NormalizedName;
use std::collections::HashSet;

/// One requirement listed under a lock stanza's `[package.dependencies]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedDependency {
    name: String,
    constraint: Option<String>,
}

impl LockedDependency {
    pub fn new(name: impl Into<String>, constraint: Option<String>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    pub fn normalized_name(&self) -> NormalizedName {
        NormalizedName::new(&self.name)
    }

    /// The exact version this requirement pins, if it pins one.
    ///
    /// `"1.2.3"` and `"==1.2.3"` pin; ranges, wildcards and compound
    /// constraints do not.
    pub fn pinned_version(&self) -> Option<&str> {
        let constraint = self.constraint.as_deref()?.trim();
        let version = constraint.strip_prefix("==").unwrap_or(constraint).trim();

        let is_exact = !version.is_empty()
            && !version
                .chars()
                .any(|c| matches!(c, '<' | '>' | '=' | '!' | '~' | '^' | '*' | ',' | ' ' | '|'));
        is_exact.then_some(version)
    }
}

/// A single `[[package]]` stanza of the lock file.
///
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedEntry {
    name: String,
    version: String,
    dependencies: Vec<LockedDependency>,
    group: Option<String>,
}

impl LockedEntry {
    /// Builds an entry, dropping repeated requirements of the same package
    /// (first occurrence wins).
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dependencies: Vec<LockedDependency>,
        group: Option<String>,
    ) -> Self {
        let mut seen = HashSet::new();
        let dependencies = dependencies
            .into_iter()
            .filter(|dep| seen.insert(dep.normalized_name()))
            .collect();

        Self {
            name: name.into(),
            version: version.into(),
            dependencies,
            group,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dependencies(&self) -> &[LockedDependency] {
        &self.dependencies
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(LockedDependency::name)
    }

    /// Group marker recorded in the lock file itself (legacy `category` key
    /// or Poetry 2.x `groups` list). `None` when the lock file says nothing.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn normalized_name(&self) -> NormalizedName {
        NormalizedName::new(&self.name)
    }

    /// `name@version`, the unique key of the package in a result.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, constraint: &str) -> LockedDependency {
        LockedDependency::new(name, Some(constraint.to_string()))
    }

    #[test]
    fn test_id_keeps_lockfile_spelling() {
        let entry = LockedEntry::new("Jinja2", "2.11.3", vec![], None);
        assert_eq!(entry.id(), "Jinja2@2.11.3");
        assert_eq!(entry.normalized_name().as_str(), "jinja2");
    }

    #[test]
    fn test_duplicate_dependencies_removed() {
        let entry = LockedEntry::new(
            "pytest",
            "8.3.4",
            vec![
                dep("colorama", "*"),
                dep("exceptiongroup", ">=1.0.0rc8"),
                dep("Colorama", ">=0.4"),
            ],
            None,
        );

        let names: Vec<&str> = entry.dependency_names().collect();
        assert_eq!(names, vec!["colorama", "exceptiongroup"]);
        assert_eq!(entry.dependencies()[0].constraint(), Some("*"));
    }

    #[test]
    fn test_group_is_optional() {
        let entry = LockedEntry::new("click", "8.1.3", vec![], None);
        assert!(entry.group().is_none());

        let dev = LockedEntry::new("pytest", "7.0.0", vec![], Some("dev".to_string()));
        assert_eq!(dev.group(), Some("dev"));
    }

    #[test]
    fn test_pinned_version_exact() {
        assert_eq!(dep("idna", "3.4").pinned_version(), Some("3.4"));
        assert_eq!(dep("idna", "==3.4").pinned_version(), Some("3.4"));
        assert_eq!(dep("idna", " == 3.4 ").pinned_version(), Some("3.4"));
    }

    #[test]
    fn test_pinned_version_ranges_do_not_pin() {
        assert_eq!(dep("idna", ">=2.5,<4").pinned_version(), None);
        assert_eq!(dep("idna", "*").pinned_version(), None);
        assert_eq!(dep("idna", "^3.0").pinned_version(), None);
        assert_eq!(dep("idna", "~=3.4").pinned_version(), None);
        assert_eq!(LockedDependency::new("idna", None).pinned_version(), None);
    }
}
