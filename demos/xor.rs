use ntic::{train, Activation, NetError, Network, TrainingSet};

fn main() -> Result<(), NetError> {
    let mut network = Network::new(2, &[2, 1])?;
    network.wire_feedforward()?;
    network.build()?;
    network.set_activation(Activation::Sigmoid);
    network.randomize();

    let mut data = TrainingSet::for_network(&network, 4, 0.9, 0.2, 100_000);
    data.inputs = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
    ];
    data.expected = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let attempts = train(&mut network, &data);
    println!("XOR trained in {attempts} attempts");

    for sample in &data.inputs {
        network.external_inputs.copy_from_slice(sample);
        let out = network.feedforward();
        println!("Input: {:?} -> Output: {:.4}", sample, out[0]);
    }
    Ok(())
}
