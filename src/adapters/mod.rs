/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: file system access,
/// console progress reporting and output formatting.
pub mod outbound;
