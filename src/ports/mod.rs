/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the use case is driven directly by the CLI.
pub mod outbound;
