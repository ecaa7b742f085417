use std::rc::Rc;

use crate::activation::activation::Activation;
use crate::error::{NetError, NetResult};
use crate::network::neuron::{Buffer, CellRef, Neuron};
use crate::network::wiring::Wiring;

/// A complete feedforward network.
///
/// Created in stages: [`Network::new`] allocates the bare topology, a wiring
/// generator (or hand-authored descriptors) fills `wiring`, and
/// [`Network::build`](crate::network::builder) resolves everything into the
/// buffers the evaluator traverses. Dropping the network releases all owned
/// storage transitively; there is no partial teardown.
#[derive(Debug, Clone)]
pub struct Network {
    /// Number of external input slots.
    pub input_count: usize,
    /// Neuron count per layer; the layer count is this vector's length.
    pub neurons_per_layer: Vec<usize>,
    /// Backing cells for the external inputs. Callers write sample values
    /// here before evaluating.
    pub external_inputs: Vec<f32>,
    /// Neuron matrix indexed `[layer][neuron]`.
    pub neurons: Vec<Vec<Neuron>>,
    /// One wiring descriptor per inter-layer gap (`layer_count - 1`).
    pub wiring: Vec<Wiring>,
    /// Resolved buffer arrays per gap, derived from `wiring` at build time.
    pub buffers: Vec<Vec<Buffer>>,
    /// Aliases of the last layer's output cells.
    pub outputs: Buffer,
}

impl Network {
    /// Allocates an empty network skeleton: the neuron matrix with every
    /// slot zeroed, no wiring, no buffers.
    ///
    /// # Errors
    /// Rejects an empty layer list and any zero-sized layer.
    pub fn new(input_count: usize, neurons_per_layer: &[usize]) -> NetResult<Network> {
        if neurons_per_layer.is_empty() {
            return Err(NetError::InvalidTopology(
                "a network needs at least one layer".into(),
            ));
        }
        for (layer, &count) in neurons_per_layer.iter().enumerate() {
            if count == 0 {
                return Err(NetError::InvalidTopology(format!(
                    "layer {} has zero neurons",
                    layer
                )));
            }
        }
        let neurons = neurons_per_layer
            .iter()
            .map(|&count| (0..count).map(|_| Neuron::unwired()).collect())
            .collect();
        Ok(Network {
            input_count,
            neurons_per_layer: neurons_per_layer.to_vec(),
            external_inputs: Vec::new(),
            neurons,
            wiring: Vec::new(),
            buffers: Vec::new(),
            outputs: Rc::from(Vec::new()),
        })
    }

    pub fn layer_count(&self) -> usize {
        self.neurons_per_layer.len()
    }

    pub fn last_layer(&self) -> usize {
        self.neurons_per_layer.len() - 1
    }

    /// Reads the scalar a cell reference currently points at.
    ///
    /// Output slots are themselves aliases, so reading one chases a single
    /// extra hop to the backing neuron output.
    pub fn read(&self, cell: CellRef) -> f32 {
        match cell {
            CellRef::Neuron { layer, index } => self.neurons[layer][index].output,
            CellRef::Input(index) => self.external_inputs[index],
            CellRef::Output(index) => self.read(self.outputs[index]),
        }
    }

    /// Current values of the network outputs, in slot order.
    pub fn output_values(&self) -> Vec<f32> {
        self.outputs.iter().map(|&cell| self.read(cell)).collect()
    }

    /// Assigns one activation to every neuron in the network.
    pub fn set_activation(&mut self, activation: Activation) {
        for layer in &mut self.neurons {
            for neuron in layer {
                neuron.activation = activation;
            }
        }
    }
}
