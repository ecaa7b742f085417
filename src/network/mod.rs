pub mod builder;
pub mod net;
pub mod neuron;
pub mod wiring;

pub use net::Network;
pub use neuron::{Buffer, CellRef, Neuron};
pub use wiring::{BufferKind, SourceRef, Wiring};
