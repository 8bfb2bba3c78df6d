/// Which dependency groups are kept out of the result.
///
/// Only the reserved development group is excluded. Other named groups
/// (`lint`, `docs`, ...) are accepted as-is and their packages reported like
/// any other; widening the exclusion is a product decision, not something to
/// infer from group names.
pub struct GroupPolicy;

impl GroupPolicy {
    /// The reserved development group name, both in `[tool.poetry.group.<name>]`
    /// and in the legacy lock-file `category` key.
    pub const RESERVED_DEV_GROUP: &'static str = "dev";

    /// The lock-file category of ordinary runtime packages in the legacy format.
    pub const MAIN_CATEGORY: &'static str = "main";

    pub fn is_excluded_group(group: &str) -> bool {
        group == Self::RESERVED_DEV_GROUP
    }

    /// A lock-file group marker that keeps its package in the result on
    /// its own (`main`, `lint`, ...).
    pub fn is_retained_group(group: &str) -> bool {
        !Self::is_excluded_group(group)
    }

    /// Collapses a Poetry 2.x `groups = [...]` list into one marker.
    ///
    /// `main` wins over everything else, a list holding only `dev` is `dev`,
    /// and any other list yields its first non-dev group. An empty list
    /// carries no information.
    pub fn lock_group(groups: &[String]) -> Option<String> {
        if groups.iter().any(|g| g == Self::MAIN_CATEGORY) {
            return Some(Self::MAIN_CATEGORY.to_string());
        }
        groups
            .iter()
            .find(|g| Self::is_retained_group(g))
            .or_else(|| groups.first())
            .cloned()
    }
}
