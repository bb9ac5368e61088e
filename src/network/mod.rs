pub mod network;
pub mod parameters;

pub use network::{forward_propagation, Network};
pub use parameters::ParameterSet;
