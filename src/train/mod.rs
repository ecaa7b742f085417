pub mod backprop;
pub mod training_set;

pub use backprop::train;
pub use training_set::TrainingSet;
