use rand::prelude::*;

use crate::network::net::Network;

impl Network {
    /// Randomizes every weight uniformly within its neuron's recommended
    /// activation range and resets every bias to zero.
    ///
    /// Call after [`Network::build`]; unbuilt neurons have no weights yet.
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        for layer in &mut self.neurons {
            for neuron in layer {
                let (min, max) = neuron.activation.init_range();
                for weight in &mut neuron.weights {
                    *weight = rng.gen::<f32>() * (max - min) + min;
                }
                neuron.bias = 0.0;
            }
        }
    }
}
