use crate::network::net::Network;

impl Network {
    /// Weighted sum of a neuron's inputs: `bias + Σ input[i] * weight[i]`.
    ///
    /// Reads the referenced cells as they are right now; the caller decides
    /// whether upstream layers have been evaluated.
    pub fn weigh(&self, layer: usize, index: usize) -> f32 {
        let neuron = &self.neurons[layer][index];
        let mut sum = neuron.bias;
        for (&cell, weight) in neuron.inputs.iter().zip(&neuron.weights) {
            sum += self.read(cell) * weight;
        }
        sum
    }

    /// Applies the neuron's activation to its weighted sum, stores the result
    /// in its output cell, and returns it.
    pub fn activate(&mut self, layer: usize, index: usize) -> f32 {
        let sum = self.weigh(layer, index);
        let neuron = &mut self.neurons[layer][index];
        neuron.output = neuron.activation.function(sum);
        neuron.output
    }

    /// One full forward pass: activates every neuron exactly once in strict
    /// layer-major, index-minor order, then returns the output values.
    ///
    /// The ordering is mandatory. Later layers alias earlier layers' output
    /// cells, so a layer must be fully activated before the next one reads it.
    pub fn feedforward(&mut self) -> Vec<f32> {
        for layer in 0..self.layer_count() {
            for index in 0..self.neurons_per_layer[layer] {
                self.activate(layer, index);
            }
        }
        self.output_values()
    }
}
