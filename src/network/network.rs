use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::activation::activation::{sigmoid, sigmoid_derivative};
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Feedforward network with exactly one hidden layer, sigmoid activations
/// and no bias terms, trained one example at a time.
#[derive(Debug, Clone)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
    /// `input_size × hidden_size`; `[(i, j)]` connects input `i` to hidden `j`.
    weights_input_hidden: Matrix,
    /// `hidden_size × output_size`; `[(i, j)]` connects hidden `i` to output `j`.
    weights_hidden_output: Matrix,
}

/// Activations captured by one forward pass.
struct Activations {
    hidden: Vec<f64>,
    output: Vec<f64>,
}

impl Network {
    /// Builds a network whose weights are drawn from an entropy-seeded
    /// generator, so every run starts from different weights.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
    ) -> Result<Network> {
        let mut rng = StdRng::from_entropy();
        Network::with_rng(input_size, hidden_size, output_size, learning_rate, &mut rng)
    }

    /// Builds a network drawing uniform `[0, 1)` weights from `rng`.
    pub fn with_rng<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network> {
        for (layer, size) in [("input", input_size), ("hidden", hidden_size), ("output", output_size)] {
            if size == 0 {
                return Err(NetworkError::ZeroSize { layer });
            }
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NetworkError::InvalidLearningRate(learning_rate));
        }

        let weights_input_hidden = Matrix::random_uniform(input_size, hidden_size, rng);
        let weights_hidden_output = Matrix::random_uniform(hidden_size, output_size, rng);
        debug!(input_size, hidden_size, output_size, learning_rate, "network initialized");

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            weights_input_hidden,
            weights_hidden_output,
        })
    }

    /// Runs a forward pass without touching any weight.
    ///
    /// Every returned value lies strictly between 0 and 1.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.check_inputs(inputs)?;
        Ok(self.forward(inputs).output)
    }

    /// Performs one stochastic gradient step on a single example.
    ///
    /// The hidden error is the raw output error pushed back through the
    /// hidden→output weights; the sigmoid derivative is applied only when
    /// each weight is updated. Both updates read the activations and errors
    /// captured before either matrix changes.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<()> {
        self.check_inputs(inputs)?;
        if targets.len() != self.output_size {
            return Err(NetworkError::TargetLength {
                expected: self.output_size,
                actual: targets.len(),
            });
        }

        let Activations { hidden, output } = self.forward(inputs);

        let output_error: Vec<f64> = targets.iter().zip(&output).map(|(t, o)| t - o).collect();
        let hidden_error = self.weights_hidden_output.mul_vec(&output_error);

        // Per-unit gradient terms: error * sigmoid'(activation).
        let output_delta: Vec<f64> = output_error
            .iter()
            .zip(&output)
            .map(|(e, &o)| e * sigmoid_derivative(o))
            .collect();
        let hidden_delta: Vec<f64> = hidden_error
            .iter()
            .zip(&hidden)
            .map(|(e, &h)| e * sigmoid_derivative(h))
            .collect();

        self.weights_hidden_output.add_outer(&hidden, &output_delta, self.learning_rate);
        self.weights_input_hidden.add_outer(inputs, &hidden_delta, self.learning_rate);

        trace!(?output_error, "train step");
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights_input_hidden(&self) -> &Matrix {
        &self.weights_input_hidden
    }

    pub fn weights_hidden_output(&self) -> &Matrix {
        &self.weights_hidden_output
    }

    fn check_inputs(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_size {
            return Err(NetworkError::InputLength {
                expected: self.input_size,
                actual: inputs.len(),
            });
        }
        Ok(())
    }

    fn forward(&self, inputs: &[f64]) -> Activations {
        let hidden = self.weights_input_hidden.vec_mul_map(inputs, sigmoid);
        let output = self.weights_hidden_output.vec_mul_map(&hidden, sigmoid);
        Activations { hidden, output }
    }
}
