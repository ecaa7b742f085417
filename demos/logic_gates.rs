//! Trains single-neuron boolean gates (AND, OR) with the threshold
//! activation, then saves and reloads the OR gate to show the `.ntic`
//! round trip.

use ntic::{train, Activation, NetError, Network, TrainingSet};

fn train_gate(name: &str, expected: [f32; 4]) -> Result<Network, NetError> {
    let mut network = Network::new(2, &[1])?;
    network.wire_feedforward()?;
    network.build()?;
    network.set_activation(Activation::Boolean);

    let mut data = TrainingSet::for_network(&network, 4, 0.5, 0.1, 1_000);
    data.inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    data.expected = expected.iter().map(|&value| vec![value]).collect();

    let attempts = train(&mut network, &data);
    println!("{name} trained in {attempts} attempts");
    for sample in &data.inputs {
        network.external_inputs.copy_from_slice(sample);
        let out = network.feedforward();
        println!("  {:?} -> {}", sample, out[0]);
    }
    Ok(network)
}

fn main() -> Result<(), NetError> {
    train_gate("AND", [0.0, 0.0, 0.0, 1.0])?;
    let or_gate = train_gate("OR", [0.0, 1.0, 1.0, 1.0])?;

    or_gate.save("or_gate")?;
    let mut reloaded = Network::load("or_gate")?;
    reloaded.external_inputs.copy_from_slice(&[1.0, 0.0]);
    println!("reloaded OR(1, 0) = {}", reloaded.feedforward()[0]);
    std::fs::remove_file("or_gate.ntic")?;
    Ok(())
}
