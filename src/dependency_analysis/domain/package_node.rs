use serde::Serialize;

/// How a package relates to the project that locked it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// No project descriptor to decide from
    #[default]
    Unknown,
    /// Listed in the project's main dependency table
    Direct,
    /// Present only because something else requires it
    Indirect,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::Unknown => write!(f, "unknown"),
            Relationship::Direct => write!(f, "direct"),
            Relationship::Indirect => write!(f, "indirect"),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A resolved package in the output, keyed by `name@version`.
///
/// `depends_on` only ever references ids of packages in the same result and
/// is kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageNode {
    id: String,
    name: String,
    version: String,
    relationship: Relationship,
    #[serde(skip_serializing_if = "is_false")]
    indirect: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

impl PackageNode {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        let version = version.into();
        Self {
            id: format!("{}@{}", name, version),
            name,
            version,
            relationship: Relationship::Unknown,
            indirect: false,
            depends_on: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn is_indirect(&self) -> bool {
        self.indirect
    }

    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    /// Sets the relationship; `indirect` follows it.
    pub fn set_relationship(&mut self, relationship: Relationship) {
        self.relationship = relationship;
        self.indirect = relationship == Relationship::Indirect;
    }

    pub(crate) fn set_depends_on(&mut self, mut ids: Vec<String>) {
        ids.sort();
        ids.dedup();
        self.depends_on = ids;
    }

    /// Builder-style helper mostly useful for constructing expected values.
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.set_relationship(relationship);
        self
    }

    pub fn with_depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_depends_on(ids.into_iter().map(Into::into).collect());
        self
    }
}
