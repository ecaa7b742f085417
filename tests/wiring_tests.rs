//! Construction and wiring-resolution tests:
//! - generator size laws (feedforward vs dense)
//! - post-build topology invariants
//! - block aliasing via Shared/Inputs/Outputs arrays
//! - rejected invalid topologies and wiring descriptors

use std::rc::Rc;

use ntic::{BufferKind, CellRef, NetError, Network, SourceRef, Wiring};

#[test]
fn feedforward_buffer_sizes_match_previous_layer() {
    let mut net = Network::new(2, &[3, 2, 1]).unwrap();
    net.wire_feedforward().unwrap();
    net.build().unwrap();

    assert_eq!(net.buffers.len(), 2);
    assert_eq!(net.buffers[0][0].len(), 3);
    assert_eq!(net.buffers[1][0].len(), 2);
    for (gap, buffer) in net.buffers.iter().enumerate() {
        for (k, cell) in buffer[0].iter().enumerate() {
            assert_eq!(*cell, CellRef::Neuron { layer: gap, index: k });
        }
    }
}

#[test]
fn dense_buffer_sizes_accumulate_across_gaps() {
    let mut net = Network::new(2, &[3, 2, 4, 1]).unwrap();
    net.wire_dense().unwrap();
    net.build().unwrap();

    // Gap i must hold the sum of all neuron counts of layers 0..=i.
    assert_eq!(net.buffers[0][0].len(), 3);
    assert_eq!(net.buffers[1][0].len(), 5);
    assert_eq!(net.buffers[2][0].len(), 9);
    // Elements walk layers in order, indices in order.
    assert_eq!(net.buffers[1][0][0], CellRef::Neuron { layer: 0, index: 0 });
    assert_eq!(net.buffers[1][0][2], CellRef::Neuron { layer: 0, index: 2 });
    assert_eq!(net.buffers[1][0][3], CellRef::Neuron { layer: 1, index: 0 });
    assert_eq!(net.buffers[1][0][4], CellRef::Neuron { layer: 1, index: 1 });
}

#[test]
fn built_neurons_satisfy_topology_invariant() {
    for wire_dense in [false, true] {
        let mut net = Network::new(4, &[3, 5, 2]).unwrap();
        if wire_dense {
            net.wire_dense().unwrap();
        } else {
            net.wire_feedforward().unwrap();
        }
        net.build().unwrap();

        for (layer, row) in net.neurons.iter().enumerate() {
            for neuron in row {
                assert_eq!(neuron.inputs.len(), neuron.weights.len());
                assert!(neuron.input_count() > 0);
                for cell in neuron.inputs.iter() {
                    match *cell {
                        CellRef::Neuron { layer: l, index } => {
                            assert!(l < layer, "inputs must come from earlier layers");
                            assert!(index < net.neurons_per_layer[l]);
                        }
                        CellRef::Input(index) => assert!(index < net.input_count),
                        CellRef::Output(index) => {
                            assert!(index < net.neurons_per_layer[net.last_layer()])
                        }
                    }
                }
            }
        }
        assert_eq!(net.external_inputs.len(), 4);
        assert_eq!(net.outputs.len(), 2);
    }
}

#[test]
fn shared_array_aliases_resolved_buffer() {
    let mut net = Network::new(2, &[2, 1]).unwrap();
    let sources = vec![
        SourceRef::Neuron { layer: 0, index: 0 },
        SourceRef::Neuron { layer: 0, index: 1 },
    ];
    net.wiring = vec![Wiring {
        arrays: vec![
            BufferKind::Mixed(sources),
            // Alias of array 0 in the same gap: legal because all Mixed
            // arrays resolve before any alias is looked up.
            BufferKind::Shared { gap: 0, array: 0 },
        ],
    }];
    net.neurons[1][0].wiring_slot = 1;
    net.build().unwrap();

    assert!(Rc::ptr_eq(&net.buffers[0][1], &net.buffers[0][0]));
    assert_eq!(net.neurons[1][0].input_count(), 2);
}

#[test]
fn inputs_array_wires_a_layer_straight_to_external_inputs() {
    let mut net = Network::new(2, &[1, 1]).unwrap();
    net.wiring = vec![Wiring {
        arrays: vec![
            BufferKind::Mixed(vec![SourceRef::Neuron { layer: 0, index: 0 }]),
            BufferKind::Inputs,
        ],
    }];
    net.neurons[1][0].wiring_slot = 1;
    net.build().unwrap();

    let neuron = &mut net.neurons[1][0];
    assert_eq!(neuron.input_count(), 2);
    neuron.weights = vec![1.0, 1.0];

    net.external_inputs.copy_from_slice(&[1.0, -2.0]);
    assert_eq!(net.feedforward()[0], 0.0);
    // Referential semantics: mutating the backing cells changes the next pass.
    net.external_inputs.copy_from_slice(&[1.0, 2.0]);
    assert_eq!(net.feedforward()[0], 1.0);
}

#[test]
fn outputs_array_resolves_to_output_aliases() {
    let mut net = Network::new(1, &[2, 2]).unwrap();
    net.wire_feedforward().unwrap();
    net.wiring[0].arrays.push(BufferKind::Outputs);
    net.wiring[0]
        .arrays
        .push(BufferKind::Mixed(vec![SourceRef::Output { index: 1 }]));
    net.build().unwrap();

    assert_eq!(net.buffers[0][1].len(), 2);
    assert_eq!(net.buffers[0][1][0], CellRef::Output(0));
    assert_eq!(net.buffers[0][2][0], CellRef::Output(1));
}

#[test]
fn zero_sized_layer_is_rejected() {
    assert!(matches!(
        Network::new(2, &[2, 0, 1]),
        Err(NetError::InvalidTopology(_))
    ));
    assert!(matches!(
        Network::new(2, &[]),
        Err(NetError::InvalidTopology(_))
    ));
}

#[test]
fn dangling_source_reference_is_a_build_error() {
    let mut net = Network::new(2, &[2, 1]).unwrap();
    net.wiring = vec![Wiring {
        arrays: vec![BufferKind::Mixed(vec![SourceRef::Neuron { layer: 0, index: 9 }])],
    }];
    assert!(matches!(net.build(), Err(NetError::InvalidWiring(_))));

    let mut net = Network::new(2, &[2, 1]).unwrap();
    net.wiring = vec![Wiring {
        arrays: vec![BufferKind::Mixed(vec![SourceRef::Input { index: 2 }])],
    }];
    assert!(matches!(net.build(), Err(NetError::InvalidWiring(_))));
}

#[test]
fn alias_of_unresolved_array_is_a_build_error() {
    let mut net = Network::new(2, &[1, 1, 1]).unwrap();
    net.wiring = vec![
        Wiring {
            // Aliases gap 1's Inputs array, which is not settled yet when
            // gap 0 aliases are resolved.
            arrays: vec![BufferKind::Shared { gap: 1, array: 0 }],
        },
        Wiring {
            arrays: vec![BufferKind::Inputs],
        },
    ];
    assert!(matches!(net.build(), Err(NetError::InvalidWiring(_))));
}

#[test]
fn out_of_range_wiring_slot_is_a_build_error() {
    let mut net = Network::new(2, &[2, 1]).unwrap();
    net.wire_feedforward().unwrap();
    net.neurons[1][0].wiring_slot = 3;
    assert!(matches!(net.build(), Err(NetError::InvalidWiring(_))));
}

#[test]
fn build_without_wiring_is_an_error() {
    let mut net = Network::new(2, &[2, 1]).unwrap();
    assert!(matches!(net.build(), Err(NetError::InvalidWiring(_))));
}

#[test]
fn single_layer_network_builds_without_wiring() {
    let mut net = Network::new(3, &[2]).unwrap();
    net.wire_feedforward().unwrap();
    net.build().unwrap();
    assert!(net.buffers.is_empty());
    assert_eq!(net.neurons[0][0].input_count(), 3);
    assert_eq!(net.outputs.len(), 2);
}
