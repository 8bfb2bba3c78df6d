/// Domain layer - lock records, manifest sets, the package graph and the
/// pure services that turn one into the other.
pub mod domain;
pub mod policies;
pub mod services;
