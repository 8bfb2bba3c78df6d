mod group_policy;

pub use group_policy::GroupPolicy;
