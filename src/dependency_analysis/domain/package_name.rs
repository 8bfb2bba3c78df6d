use std::fmt;

/// Package name in its canonical matching form.
///
/// Lower-cased, with every run of `-`, `_` and `.` collapsed into a single `-`
/// (`Jinja2`, `jinja2` and `typing_extensions`/`typing-extensions` compare
/// equal). An extras suffix such as `requests[socks]` is dropped.
///
/// Only used to match names across the lock file and the project descriptor;
/// names shown to users keep the lock file's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn new(name: &str) -> Self {
        let base = name.split('[').next().unwrap_or(name).trim();

        let mut normalized = String::with_capacity(base.len());
        let mut in_separator_run = false;
        for c in base.chars() {
            if matches!(c, '-' | '_' | '.') {
                if !in_separator_run {
                    normalized.push('-');
                }
                in_separator_run = true;
            } else {
                normalized.extend(c.to_lowercase());
                in_separator_run = false;
            }
        }

        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for NormalizedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
