use crate::dependency_analysis::domain::{ManifestSets, NormalizedName};
use crate::dependency_analysis::policies::GroupPolicy;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Key of the interpreter requirement in `[tool.poetry.dependencies]`
const PYTHON_RUNTIME: &str = "python";

#[derive(Debug, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Option<ToolTable>,
    #[serde(default)]
    project: Option<ProjectTable>,
}

#[derive(Debug, Deserialize)]
struct ToolTable {
    #[serde(default)]
    poetry: Option<PoetryTable>,
}

#[derive(Debug, Deserialize)]
struct PoetryTable {
    #[serde(default)]
    dependencies: BTreeMap<String, toml::Value>,
    /// Pre-1.2 spelling of the dev group
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, toml::Value>,
    #[serde(default)]
    group: BTreeMap<String, PoetryGroup>,
}

#[derive(Debug, Deserialize)]
struct PoetryGroup {
    #[serde(default)]
    dependencies: BTreeMap<String, toml::Value>,
}

/// PEP 621 `[project]` table
#[derive(Debug, Deserialize)]
struct ProjectTable {
    #[serde(default)]
    dependencies: Vec<String>,
}

/// ManifestReader extracts dependency-group membership from `pyproject.toml`.
///
/// Nothing else in the descriptor is validated.
pub struct ManifestReader;

impl ManifestReader {
    /// Parses the descriptor into main / dev-only / other-group name sets.
    ///
    /// # Errors
    /// Returns an error when the content is not valid TOML, when a known key
    /// holds the wrong kind of value, or when the file has neither a
    /// `[tool.poetry]` nor a `[project]` table. Callers treat every error the
    /// same way: no manifest information.
    pub fn parse(content: &str) -> Result<ManifestSets> {
        let pyproject: PyProject =
            toml::from_str(content).context("Failed to parse pyproject.toml")?;

        let poetry = pyproject.tool.and_then(|tool| tool.poetry);
        if poetry.is_none() && pyproject.project.is_none() {
            anyhow::bail!("pyproject.toml has neither a [tool.poetry] nor a [project] table");
        }

        let mut direct: HashSet<NormalizedName> = HashSet::new();
        let mut dev: HashSet<NormalizedName> = HashSet::new();
        let mut other_groups: HashSet<NormalizedName> = HashSet::new();

        if let Some(project) = &pyproject.project {
            direct.extend(
                project
                    .dependencies
                    .iter()
                    .filter_map(|requirement| requirement_name(requirement))
                    .map(NormalizedName::new),
            );
        }

        if let Some(poetry) = &poetry {
            direct.extend(poetry.dependencies.keys().map(|name| NormalizedName::new(name)));
            dev.extend(
                poetry
                    .dev_dependencies
                    .keys()
                    .map(|name| NormalizedName::new(name)),
            );

            for (group_name, group) in &poetry.group {
                let names = group.dependencies.keys().map(|name| NormalizedName::new(name));
                if GroupPolicy::is_excluded_group(group_name) {
                    dev.extend(names);
                } else {
                    other_groups.extend(names);
                }
            }
        }

        let runtime = NormalizedName::new(PYTHON_RUNTIME);
        direct.remove(&runtime);
        other_groups.remove(&runtime);

        // A dev-group name also declared elsewhere is not dev-only.
        let dev_only = dev
            .into_iter()
            .filter(|name| name != &runtime && !direct.contains(name) && !other_groups.contains(name))
            .collect();

        Ok(ManifestSets::new(direct, dev_only, other_groups))
    }
}

/// Distribution name of a PEP 508 requirement string
/// (`"requests[socks] >=2.28 ; python_version >= '3.8'"` -> `requests`).
fn requirement_name(requirement: &str) -> Option<&str> {
    let trimmed = requirement.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(trimmed.len());
    let name = &trimmed[..end];
    (!name.is_empty()).then_some(name)
}
