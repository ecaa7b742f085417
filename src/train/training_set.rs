use serde::{Serialize, Deserialize};

use crate::network::net::Network;

/// Supervised training data plus the hyperparameters of a training run.
///
/// `inputs` and `expected` are parallel: sample `i` pairs `inputs[i]`
/// (length = network input count) with `expected[i]` (length = last-layer
/// neuron count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSet {
    pub learning_rate: f32,
    /// Training stops once the summed absolute output error of a full epoch
    /// drops to this value or below.
    pub tolerance: f32,
    /// Hard stop: maximum number of epochs.
    pub max_attempts: usize,
    pub inputs: Vec<Vec<f32>>,
    pub expected: Vec<Vec<f32>>,
}

impl TrainingSet {
    /// Allocates a zero-filled training set shaped for `net`: `samples`
    /// input rows of the network's input count and as many expected rows of
    /// its last-layer size.
    pub fn for_network(
        net: &Network,
        samples: usize,
        learning_rate: f32,
        tolerance: f32,
        max_attempts: usize,
    ) -> TrainingSet {
        let outputs = net.neurons_per_layer[net.last_layer()];
        TrainingSet {
            learning_rate,
            tolerance,
            max_attempts,
            inputs: vec![vec![0.0; net.input_count]; samples],
            expected: vec![vec![0.0; outputs]; samples],
        }
    }

    pub fn sample_count(&self) -> usize {
        self.inputs.len()
    }

    /// Serializes the training set to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a training set from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TrainingSet> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
