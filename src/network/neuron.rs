use std::rc::Rc;

use crate::activation::activation::Activation;

/// Address of one scalar cell inside a network.
///
/// Raw pointer aliasing from the classic formulation becomes a typed index
/// here: a cell is read through the owning [`Network`](crate::Network), so
/// any number of neurons can fan out from the same backing scalar without
/// lifetime gymnastics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRef {
    /// The output cell of the neuron at `[layer][index]`.
    Neuron { layer: usize, index: usize },
    /// An external input slot.
    Input(usize),
    /// A network output slot (itself an alias of a last-layer output cell).
    Output(usize),
}

/// A resolved buffer: a shared, immutable array of cell references.
///
/// Block aliasing (two wiring arrays reading the same buffer) is an
/// `Rc::clone`, which preserves the pointer-copy semantics of the wiring
/// model: the alias inherits the target's contents and length.
pub type Buffer = Rc<[CellRef]>;

/// A single scalar computation unit.
///
/// Invariant for every built neuron: `inputs.len() == weights.len()`.
/// The input count is not stored separately; it is `inputs.len()`.
#[derive(Debug, Clone)]
pub struct Neuron {
    /// References to the scalars this neuron reads, resolved at build time.
    pub inputs: Buffer,
    /// One weight per input, owned.
    pub weights: Vec<f32>,
    pub bias: f32,
    pub activation: Activation,
    /// Last computed value; overwritten by every evaluation.
    pub output: f32,
    /// Which buffer array of the preceding gap this neuron reads from.
    /// Consumed during construction; evaluation uses the resolved `inputs`.
    pub wiring_slot: usize,
}

impl Neuron {
    /// A zeroed neuron slot, not yet connected to anything.
    pub(crate) fn unwired() -> Neuron {
        Neuron {
            inputs: Rc::from(Vec::new()),
            weights: Vec::new(),
            bias: 0.0,
            activation: Activation::Boolean,
            output: 0.0,
            wiring_slot: 0,
        }
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }
}
