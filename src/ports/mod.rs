/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the core reads files, reports progress and
/// hands formatted output to a presenter through these traits.
pub mod outbound;
