pub mod activation;
pub mod compute;
pub mod error;
pub mod init;
pub mod io;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::Activation;
pub use error::{NetError, NetResult};
pub use network::net::Network;
pub use network::neuron::{Buffer, CellRef, Neuron};
pub use network::wiring::{BufferKind, SourceRef, Wiring};
pub use train::backprop::train;
pub use train::training_set::TrainingSet;
