use std::rc::Rc;

use crate::error::{NetError, NetResult};
use crate::network::net::Network;
use crate::network::neuron::{Buffer, CellRef};
use crate::network::wiring::{BufferKind, SourceRef};

impl Network {
    /// Resolves the attached wiring into live buffers and connects every
    /// neuron to its inputs.
    ///
    /// Steps, in order:
    /// 1. allocate the external input cells and wire layer 0 to them,
    /// 2. resolve the output aliases of the last layer,
    /// 3. resolve every `Mixed` array across all gaps (direct phase),
    /// 4. resolve every aliasing array (`Shared`/`Inputs`/`Outputs`), which
    ///    inherits the target's already-resolved buffer and size,
    /// 5. point each neuron of layers `1..` at `buffers[gap][wiring_slot]`
    ///    and allocate its weights to match.
    ///
    /// The direct/alias split is two explicit passes: an alias copies a
    /// resolved buffer, so every `Mixed` array must exist before any alias
    /// that names it is looked up.
    ///
    /// # Errors
    /// Out-of-range source references, aliases of unresolved arrays, missing
    /// gap descriptors, and out-of-range wiring slots are all reported as
    /// [`NetError::InvalidWiring`]; nothing dangling survives a successful
    /// build.
    pub fn build(&mut self) -> NetResult<()> {
        let gaps = self.layer_count() - 1;
        if self.wiring.len() != gaps {
            return Err(NetError::InvalidWiring(format!(
                "expected {} gap descriptors, found {}",
                gaps,
                self.wiring.len()
            )));
        }

        self.external_inputs = vec![0.0; self.input_count];
        let input_cells: Buffer = (0..self.input_count)
            .map(CellRef::Input)
            .collect::<Vec<_>>()
            .into();
        for neuron in &mut self.neurons[0] {
            neuron.inputs = Rc::clone(&input_cells);
            neuron.weights = vec![0.0; self.input_count];
        }

        let last = self.last_layer();
        self.outputs = (0..self.neurons_per_layer[last])
            .map(|index| CellRef::Neuron { layer: last, index })
            .collect::<Vec<_>>()
            .into();

        // Direct phase: every Mixed array, all gaps in order.
        let mut resolved: Vec<Vec<Option<Buffer>>> = self
            .wiring
            .iter()
            .map(|wiring| vec![None; wiring.arrays.len()])
            .collect();
        for gap in 0..gaps {
            for (array, kind) in self.wiring[gap].arrays.iter().enumerate() {
                if let BufferKind::Mixed(sources) = kind {
                    let mut cells = Vec::with_capacity(sources.len());
                    for (element, &source) in sources.iter().enumerate() {
                        cells.push(self.resolve_source(gap, array, element, source)?);
                    }
                    resolved[gap][array] = Some(cells.into());
                }
            }
        }

        // Alias phase: block references to buffers resolved above (or, for
        // Shared, to aliases of an earlier gap already settled in this pass).
        for gap in 0..gaps {
            for (array, kind) in self.wiring[gap].arrays.iter().enumerate() {
                match *kind {
                    BufferKind::Mixed(_) => {}
                    BufferKind::Shared {
                        gap: target_gap,
                        array: target_array,
                    } => {
                        let target = resolved
                            .get(target_gap)
                            .and_then(|arrays| arrays.get(target_array))
                            .and_then(|buffer| buffer.clone())
                            .ok_or_else(|| {
                                NetError::InvalidWiring(format!(
                                    "gap {} array {} aliases unresolved array {} of gap {}",
                                    gap, array, target_array, target_gap
                                ))
                            })?;
                        resolved[gap][array] = Some(target);
                    }
                    BufferKind::Inputs => {
                        resolved[gap][array] = Some(Rc::clone(&input_cells));
                    }
                    BufferKind::Outputs => {
                        let cells: Buffer = (0..self.neurons_per_layer[last])
                            .map(CellRef::Output)
                            .collect::<Vec<_>>()
                            .into();
                        resolved[gap][array] = Some(cells);
                    }
                }
            }
        }

        self.buffers = resolved
            .into_iter()
            .map(|arrays| arrays.into_iter().flatten().collect())
            .collect();

        for layer in 1..self.layer_count() {
            let gap = layer - 1;
            for index in 0..self.neurons_per_layer[layer] {
                let slot = self.neurons[layer][index].wiring_slot;
                let buffer = self.buffers[gap].get(slot).ok_or_else(|| {
                    NetError::InvalidWiring(format!(
                        "neuron [{}][{}] reads slot {} but gap {} has {} arrays",
                        layer,
                        index,
                        slot,
                        gap,
                        self.buffers[gap].len()
                    ))
                })?;
                let buffer = Rc::clone(buffer);
                let count = buffer.len();
                let neuron = &mut self.neurons[layer][index];
                neuron.inputs = buffer;
                neuron.weights = vec![0.0; count];
            }
        }
        Ok(())
    }

    fn resolve_source(
        &self,
        gap: usize,
        array: usize,
        element: usize,
        source: SourceRef,
    ) -> NetResult<CellRef> {
        let out_of_range = |what: &str| {
            NetError::InvalidWiring(format!(
                "gap {} array {} element {}: {} out of range",
                gap, array, element, what
            ))
        };
        match source {
            SourceRef::Neuron { layer, index } => {
                if layer >= self.layer_count() || index >= self.neurons_per_layer[layer] {
                    return Err(out_of_range("neuron reference"));
                }
                Ok(CellRef::Neuron { layer, index })
            }
            SourceRef::Input { index } => {
                if index >= self.input_count {
                    return Err(out_of_range("input reference"));
                }
                Ok(CellRef::Input(index))
            }
            SourceRef::Output { index } => {
                if index >= self.neurons_per_layer[self.last_layer()] {
                    return Err(out_of_range("output reference"));
                }
                Ok(CellRef::Output(index))
            }
        }
    }
}
