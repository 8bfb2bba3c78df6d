use crate::dependency_analysis::domain::{LockedDependency, LockedEntry};
use crate::dependency_analysis::policies::GroupPolicy;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct PoetryLock {
    #[serde(default)]
    package: Vec<PoetryPackage>,
}

#[derive(Debug, Deserialize)]
struct PoetryPackage {
    name: String,
    version: String,
    /// Only written by Poetry < 1.2 (`"main"` / `"dev"`)
    #[serde(default)]
    category: Option<String>,
    /// Written by Poetry >= 2.0 (`["main"]`, `["dev"]`, `["dev", "lint"]`, ...)
    #[serde(default)]
    groups: Vec<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, DependencySpec>,
}

/// Right-hand side of a `[package.dependencies]` entry.
///
/// ```toml
/// click = ">=5.1,<8.0"
/// colorama = {version = "*", markers = "platform_system == \"Windows\""}
/// numpy = [
///     {version = ">=1.21", markers = "python_version < \"3.12\""},
///     {version = ">=1.26", markers = "python_version >= \"3.12\""},
/// ]
/// ```
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DependencySpec {
    Version(String),
    Detailed(DetailedDependency),
    Multiple(Vec<DetailedDependency>),
}

#[derive(Debug, Deserialize)]
struct DetailedDependency {
    #[serde(default)]
    version: Option<String>,
}

impl DependencySpec {
    /// A single constraint string, when there is exactly one.
    fn into_constraint(self) -> Option<String> {
        match self {
            DependencySpec::Version(version) => Some(version),
            DependencySpec::Detailed(detailed) => detailed.version,
            DependencySpec::Multiple(mut alternatives) => {
                if alternatives.len() == 1 {
                    alternatives.pop().and_then(|d| d.version)
                } else {
                    None
                }
            }
        }
    }
}

/// LockRecordParser turns `poetry.lock` text into `LockedEntry` records.
///
/// Markers, extras and the `[package.extras]` / `[metadata]` tables are
/// ignored; only names, resolved versions and requirement names matter here.
pub struct LockRecordParser;

impl LockRecordParser {
    /// Parses the lock file contents.
    ///
    /// # Errors
    /// Returns an error when the content is not valid TOML, when a
    /// `[[package]]` stanza lacks `name` or `version`, or when either is empty.
    /// Callers get all entries or none.
    pub fn parse(content: &str) -> Result<Vec<LockedEntry>> {
        let lockfile: PoetryLock =
            toml::from_str(content).context("Failed to parse poetry.lock file")?;

        lockfile
            .package
            .into_iter()
            .enumerate()
            .map(|(position, pkg)| Self::into_entry(position, pkg))
            .collect()
    }

    fn into_entry(position: usize, pkg: PoetryPackage) -> Result<LockedEntry> {
        if pkg.name.trim().is_empty() {
            anyhow::bail!("[[package]] #{} has an empty name", position + 1);
        }
        if pkg.version.trim().is_empty() {
            anyhow::bail!("[[package]] '{}' has an empty version", pkg.name);
        }

        let dependencies = pkg
            .dependencies
            .into_iter()
            .map(|(name, spec)| LockedDependency::new(name, spec.into_constraint()))
            .collect();

        let group = pkg
            .category
            .or_else(|| GroupPolicy::lock_group(&pkg.groups));

        Ok(LockedEntry::new(pkg.name, pkg.version, dependencies, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lockfile() {
        let content = r#"
[[package]]
name = "certifi"
version = "2022.12.7"
description = "Python package for providing Mozilla's CA Bundle."
category = "main"
optional = false
python-versions = ">=3.6"

[[package]]
name = "requests"
version = "2.28.1"
description = "Python HTTP for Humans."
category = "main"
optional = false
python-versions = ">=3.7, <4"

[package.dependencies]
certifi = ">=2017.4.17"
charset-normalizer = ">=2,<3"
idna = ">=2.5,<4"
urllib3 = ">=1.21.1,<1.27"

[package.extras]
socks = ["PySocks (>=1.5.6,!=1.5.7)"]

[metadata]
lock-version = "1.1"
python-versions = "^3.9"
content-hash = "abc"
"#;

        let entries = LockRecordParser::parse(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "certifi");
        assert_eq!(entries[0].version(), "2022.12.7");
        assert_eq!(entries[0].group(), Some("main"));

        let requests = &entries[1];
        let names: Vec<&str> = requests.dependency_names().collect();
        assert_eq!(names, vec!["certifi", "charset-normalizer", "idna", "urllib3"]);
        assert_eq!(requests.dependencies()[2].constraint(), Some(">=2.5,<4"));
    }

    #[test]
    fn test_parse_detailed_and_multiple_constraints() {
        let content = r#"
[[package]]
name = "click"
version = "8.1.3"

[package.dependencies]
colorama = {version = "*", markers = "platform_system == \"Windows\""}
importlib-metadata = {version = "*", markers = "python_version < \"3.8\""}
numpy = [
    {version = ">=1.21", markers = "python_version < \"3.12\""},
    {version = ">=1.26", markers = "python_version >= \"3.12\""},
]
mylib = {git = "https://example.com/mylib.git", rev = "main"}
"#;

        let entries = LockRecordParser::parse(content).unwrap();
        let deps = entries[0].dependencies();
        assert_eq!(deps.len(), 4);
        assert_eq!(deps[0].name(), "colorama");
        assert_eq!(deps[0].constraint(), Some("*"));
        assert_eq!(deps[2].name(), "mylib");
        assert_eq!(deps[2].constraint(), None);
        assert_eq!(deps[3].name(), "numpy");
        assert_eq!(deps[3].constraint(), None);
    }

    #[test]
    fn test_parse_legacy_dev_category() {
        let content = r#"
[[package]]
name = "pytest"
version = "7.2.0"
category = "dev"

[[package]]
name = "click"
version = "8.1.3"
category = "main"
"#;

        let entries = LockRecordParser::parse(content).unwrap();
        assert_eq!(entries[0].group(), Some("dev"));
        assert_eq!(entries[1].group(), Some("main"));
    }

    #[test]
    fn test_parse_groups_list() {
        let content = r#"
[[package]]
name = "pytest"
version = "8.3.4"
groups = ["dev"]

[[package]]
name = "packaging"
version = "24.2"
groups = ["main", "dev"]

[[package]]
name = "ruff"
version = "0.8.3"
groups = ["lint"]

[[package]]
name = "attrs"
version = "24.2.0"
"#;

        let entries = LockRecordParser::parse(content).unwrap();
        assert_eq!(entries[0].group(), Some("dev"));
        assert_eq!(entries[1].group(), Some("main"));
        assert_eq!(entries[2].group(), Some("lint"));
        assert!(entries[3].group().is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = LockRecordParser::parse("invalid toml content [[[");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse poetry.lock file"));
    }

    #[test]
    fn test_parse_missing_version_fails_whole_file() {
        let content = r#"
[[package]]
name = "click"
version = "8.1.3"

[[package]]
name = "colorama"
"#;
        assert!(LockRecordParser::parse(content).is_err());
    }

    #[test]
    fn test_parse_empty_name_fails() {
        let content = r#"
[[package]]
name = ""
version = "1.0.0"
"#;
        let err = LockRecordParser::parse(content).unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_parse_without_packages() {
        let content = r#"
[metadata]
lock-version = "2.0"
"#;
        let entries = LockRecordParser::parse(content).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_deduplicates_differently_spelled_requirements() {
        let content = r#"
[[package]]
name = "flask"
version = "1.1.4"

[package.dependencies]
Jinja2 = ">=2.10.1,<3.0"
jinja2 = ">=2.10.1"
"#;
        let entries = LockRecordParser::parse(content).unwrap();
        assert_eq!(entries[0].dependencies().len(), 1);
        assert_eq!(entries[0].dependencies()[0].name(), "Jinja2");
    }
}
