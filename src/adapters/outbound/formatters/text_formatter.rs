use crate::dependency_analysis::domain::{AnalysisResult, PackageNode, Relationship};
use crate::ports::outbound::AnalysisFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter rendering a human-readable dependency listing
///
/// ```text
/// poetry.lock (poetry)
///   flask 2.2.2 [direct]
///     -> click@8.1.3
/// ```
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    /// ANSI colors for terminal output
    pub fn colored() -> Self {
        Self { colored: true }
    }

    pub fn with_color(colored: bool) -> Self {
        Self { colored }
    }

    fn render_relationship(&self, relationship: Relationship) -> String {
        let label = format!("[{}]", relationship);
        if !self.colored {
            return label;
        }
        match relationship {
            Relationship::Direct => label.green().to_string(),
            Relationship::Indirect => label.yellow().to_string(),
            Relationship::Unknown => label.dimmed().to_string(),
        }
    }

    fn render_package(&self, output: &mut String, package: &PackageNode) -> std::fmt::Result {
        let name = if self.colored {
            package.name().bold().to_string()
        } else {
            package.name().to_string()
        };
        writeln!(
            output,
            "  {} {} {}",
            name,
            package.version(),
            self.render_relationship(package.relationship())
        )?;
        for dependency in package.depends_on() {
            writeln!(output, "    -> {}", dependency)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisFormatter for TextFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        if result.is_empty() {
            output.push_str("No Poetry lock files found.\n");
            return Ok(output);
        }

        for (idx, app) in result.applications().iter().enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            let header = format!("{} ({})", app.file_path(), app.app_type());
            if self.colored {
                writeln!(output, "{}", header.cyan().bold())?;
            } else {
                writeln!(output, "{}", header)?;
            }

            if app.packages().is_empty() {
                output.push_str("  (no packages)\n");
                continue;
            }
            for package in app.packages() {
                self.render_package(&mut output, package)?;
            }
        }

        Ok(output)
    }
}
