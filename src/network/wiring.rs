use crate::error::{NetError, NetResult};
use crate::network::net::Network;

/// Where a single element of a [`BufferKind::Mixed`] array reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRef {
    /// The output of the neuron at `[layer][index]`.
    Neuron { layer: usize, index: usize },
    /// External input slot `index`.
    Input { index: usize },
    /// Network output slot `index`.
    Output { index: usize },
}

/// One connection array inside a gap's wiring descriptor.
///
/// A `Mixed` array is resolved element by element; the other kinds alias an
/// existing array as a whole block and inherit its resolved size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferKind {
    /// Per-element sources.
    Mixed(Vec<SourceRef>),
    /// Alias of the already-resolved array `array` in gap `gap`.
    Shared { gap: usize, array: usize },
    /// Alias of the network's external input slots.
    Inputs,
    /// Alias of the network's output slots.
    Outputs,
}

/// Wiring descriptor for one inter-layer gap: the ordered connection arrays
/// available to the following layer's neurons via their `wiring_slot`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wiring {
    pub arrays: Vec<BufferKind>,
}

impl Network {
    /// Simple feedforward wiring: per gap `i`, a single Mixed array listing
    /// every neuron of layer `i` in index order. Every neuron of layer `i+1`
    /// reads from slot 0.
    ///
    /// Populates the wiring descriptors only; buffers are resolved later by
    /// [`Network::build`].
    pub fn wire_feedforward(&mut self) -> NetResult<()> {
        self.wiring_guard()?;
        let mut wiring = Vec::with_capacity(self.layer_count() - 1);
        for gap in 0..self.layer_count() - 1 {
            let sources = (0..self.neurons_per_layer[gap])
                .map(|index| SourceRef::Neuron { layer: gap, index })
                .collect();
            wiring.push(Wiring { arrays: vec![BufferKind::Mixed(sources)] });
            for neuron in &mut self.neurons[gap + 1] {
                neuron.wiring_slot = 0;
            }
        }
        self.wiring = wiring;
        Ok(())
    }

    /// Dense wiring: per gap `i`, a single Mixed array walking every neuron
    /// of every layer `0..=i` in layer-major, index-minor order, so each
    /// layer sees the outputs of all preceding layers. Every neuron of layer
    /// `i+1` reads from slot 0.
    pub fn wire_dense(&mut self) -> NetResult<()> {
        self.wiring_guard()?;
        let mut wiring = Vec::with_capacity(self.layer_count() - 1);
        for gap in 0..self.layer_count() - 1 {
            let mut sources = Vec::new();
            for layer in 0..=gap {
                for index in 0..self.neurons_per_layer[layer] {
                    sources.push(SourceRef::Neuron { layer, index });
                }
            }
            wiring.push(Wiring { arrays: vec![BufferKind::Mixed(sources)] });
            for neuron in &mut self.neurons[gap + 1] {
                neuron.wiring_slot = 0;
            }
        }
        self.wiring = wiring;
        Ok(())
    }

    fn wiring_guard(&self) -> NetResult<()> {
        if self.neurons.is_empty() {
            return Err(NetError::InvalidTopology(
                "wiring generators require an initialized topology".into(),
            ));
        }
        Ok(())
    }
}
