/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are driven by the CLI; outbound ports are implemented by
/// the adapters.
pub mod inbound;
pub mod outbound;
