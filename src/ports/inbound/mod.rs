/// Inbound ports (Driving ports) - Use case interfaces
///
/// The CLI drives the application core through these traits.
pub mod result_merging_port;

pub use result_merging_port::{ResultMergingPort, ResultSplittingPort};
