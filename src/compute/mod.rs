pub mod feedforward;
