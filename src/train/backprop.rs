use crate::network::net::Network;
use crate::train::training_set::TrainingSet;

/// Trains `net` in place with plain online stochastic gradient descent and
/// returns the number of epochs ("attempts") consumed.
///
/// Each epoch walks the samples in order. Per sample: copy its inputs into
/// the network's input cells, run a forward pass, compute last-layer deltas
/// `expected - output` scaled by the activation derivative at the
/// **pre-activation** weighted sum, and, unless the error accumulated so
/// far this epoch is already under `tolerance`, propagate deltas backward
/// layer by layer, updating weights and biases as it goes. The loop stops
/// when a full epoch's summed absolute error is at or below `tolerance`, or
/// after `max_attempts` epochs. A zero attempt budget trains nothing and
/// returns 0.
///
/// The derivative is evaluated at `weigh(..)` rather than reusing the stored
/// output on purpose: for the boolean activation, whose derivative is a
/// constant, the two conventions are not interchangeable.
///
/// The backward walk treats input slot `l` of layer `j + 1` as neuron `l` of
/// layer `j`, which is exact for generator-produced feedforward wiring.
///
/// # Panics
/// Panics if the network is unbuilt, `data` is empty, or sample shapes do
/// not match the network.
pub fn train(net: &mut Network, data: &TrainingSet) -> usize {
    assert_eq!(
        net.external_inputs.len(),
        net.input_count,
        "network must be built before training"
    );
    assert!(!data.inputs.is_empty(), "training set must not be empty");
    assert_eq!(
        data.inputs.len(),
        data.expected.len(),
        "inputs and expected must have equal length"
    );
    let last = net.last_layer();
    for sample in 0..data.sample_count() {
        assert_eq!(
            data.inputs[sample].len(),
            net.input_count,
            "sample input width must match the network input count"
        );
        assert_eq!(
            data.expected[sample].len(),
            net.neurons_per_layer[last],
            "sample expected width must match the last layer"
        );
    }
    if data.max_attempts == 0 {
        return 0;
    }

    // Delta buffers are shared across layers; size them for the widest layer
    // or fan-in so hand-authored wirings cannot index past the end.
    let max_width = net
        .neurons_per_layer
        .iter()
        .copied()
        .chain(
            net.neurons
                .iter()
                .flatten()
                .map(|neuron| neuron.input_count()),
        )
        .max()
        .unwrap_or(0);
    let mut delta = vec![0.0f32; max_width];
    let mut delta_hidden = vec![0.0f32; max_width];
    let mut input_scratch = vec![0.0f32; max_width.max(net.input_count)];

    let mut attempt = 0;
    loop {
        let mut total_error = 0.0f32;
        for sample in 0..data.sample_count() {
            net.external_inputs.copy_from_slice(&data.inputs[sample]);
            net.feedforward();

            for j in 0..net.neurons_per_layer[last] {
                let diff = data.expected[sample][j] - net.read(net.outputs[j]);
                total_error += diff.abs();
                let derivative = net.neurons[last][j].activation.derivative(net.weigh(last, j));
                delta[j] = diff * derivative;
            }
            if total_error < data.tolerance {
                continue;
            }

            for layer in (0..last).rev() {
                let next = layer + 1;
                for value in &mut delta_hidden {
                    *value = 0.0;
                }
                for k in 0..net.neurons_per_layer[next] {
                    for (l, weight) in net.neurons[next][k].weights.iter().enumerate() {
                        delta_hidden[l] += delta[k] * weight;
                    }
                }
                for k in 0..net.neurons_per_layer[layer] {
                    let derivative = net.neurons[layer][k]
                        .activation
                        .derivative(net.weigh(layer, k));
                    delta_hidden[k] *= derivative;
                }
                for k in 0..net.neurons_per_layer[next] {
                    apply_update(net, next, k, delta[k] * data.learning_rate, &mut input_scratch);
                }
                delta.copy_from_slice(&delta_hidden);
            }

            for j in 0..net.neurons_per_layer[0] {
                apply_update(net, 0, j, delta[j] * data.learning_rate, &mut input_scratch);
            }
        }
        attempt += 1;
        if attempt >= data.max_attempts || total_error <= data.tolerance {
            return attempt;
        }
    }
}

/// One in-place SGD step for a single neuron:
/// `w[l] += step * input[l]`, `bias += step`.
///
/// Input values are snapshot into `scratch` first because the update mutates
/// the neuron while its input cells may alias other parts of the network.
fn apply_update(net: &mut Network, layer: usize, index: usize, step: f32, scratch: &mut [f32]) {
    let count = net.neurons[layer][index].input_count();
    for l in 0..count {
        scratch[l] = net.read(net.neurons[layer][index].inputs[l]);
    }
    let neuron = &mut net.neurons[layer][index];
    for (l, weight) in neuron.weights.iter_mut().enumerate() {
        *weight += step * scratch[l];
    }
    neuron.bias += step;
}
