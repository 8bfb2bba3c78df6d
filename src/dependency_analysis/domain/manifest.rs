use super::NormalizedName;
use std::collections::HashSet;

/// What the project descriptor says about dependency groups.
///
/// All sets hold normalized names. An absent or unusable descriptor is
/// represented by `ManifestSets::default()` (every set empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSets {
    direct: HashSet<NormalizedName>,
    dev_group: HashSet<NormalizedName>,
    other_groups: HashSet<NormalizedName>,
}

impl ManifestSets {
    /// * `direct` - names in the main dependency table
    /// * `dev_group` - names declared only under the reserved development group
    /// * `other_groups` - names declared under any other named group
    pub fn new(
        direct: HashSet<NormalizedName>,
        dev_group: HashSet<NormalizedName>,
        other_groups: HashSet<NormalizedName>,
    ) -> Self {
        Self {
            direct,
            dev_group,
            other_groups,
        }
    }

    pub fn direct(&self) -> &HashSet<NormalizedName> {
        &self.direct
    }

    pub fn dev_group(&self) -> &HashSet<NormalizedName> {
        &self.dev_group
    }

    pub fn other_groups(&self) -> &HashSet<NormalizedName> {
        &self.other_groups
    }

    pub fn is_direct(&self, name: &NormalizedName) -> bool {
        self.direct.contains(name)
    }

    pub fn is_dev_only(&self, name: &NormalizedName) -> bool {
        self.dev_group.contains(name)
    }

    /// Declared by the project as something it ships or keeps: main table or
    /// a non-reserved group.
    pub fn is_declared_root(&self, name: &NormalizedName) -> bool {
        self.direct.contains(name) || self.other_groups.contains(name)
    }

    /// Whether there is anything to classify against. With neither a main
    /// table nor a dev group, relationships stay unknown.
    pub fn is_classifiable(&self) -> bool {
        !self.direct.is_empty() || !self.dev_group.is_empty()
    }
}
