pub mod activations;
pub mod config;
pub mod metrics;
mod optimizer;

use crate::prelude::*;

use crate::matrix::{ops::Dot, Matrix2};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};

use self::activations::{Activation, Sigmoid};
use self::config::NeuralNetConfig;
use self::optimizer::Backprop;

/// A fully connected sigmoid layer.
/// `weights` is n_inputs x n_neurons, `biases` is 1 x n_neurons.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Matrix2<f64>,
    biases: Matrix2<f64>,
}

/// Hidden and output layer of a trained network.
#[derive(Debug, Clone, PartialEq)]
struct Layers {
    hidden: DenseLayer,
    output: DenseLayer,
}

/// Single hidden layer network trained with full-batch backpropagation.
///
/// Starts out untrained; [`NeuralNet::predict`] only succeeds after a
/// successful [`NeuralNet::train`]. Training again discards the previous
/// parameters and starts from a fresh random initialization.
#[derive(Debug, Clone)]
pub struct NeuralNet {
    config: NeuralNetConfig,
    layers: Option<Layers>,
}

impl DenseLayer {
    /// Initializes a layer given the number of inputs and neurons.
    /// Weights then biases are drawn uniformly from [0, 1).
    fn random<R: Rng + ?Sized>(n_inputs: usize, n_neurons: usize, rng: &mut R) -> Self {
        let die = Uniform::from(0.0..1.0);

        let weights = Matrix2::from_fn(n_inputs, n_neurons, |_, _| die.sample(&mut *rng));
        let biases = Matrix2::from_fn(1, n_neurons, |_, _| die.sample(&mut *rng));

        Self { weights, biases }
    }

    /// Propogates a batch of inputs through the layer applying sigmoid.
    pub fn run_batch(&self, input: &Matrix2<f64>) -> Result<Matrix2<f64>> {
        let mut res = input.dot(&self.weights)?.broadcast_add_row(&self.biases)?;
        res.apply(|x| Sigmoid.call(x));
        Ok(res)
    }

    pub fn weights(&self) -> &Matrix2<f64> {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix2<f64> {
        &self.biases
    }

    /// Returns the amount of inputs this layer accepts
    pub fn input_amount(&self) -> usize {
        self.weights.rows()
    }

    /// Returns the amount of neurons in the layer
    pub fn neuron_amount(&self) -> usize {
        self.weights.cols()
    }
}

impl Layers {
    fn random<R: Rng + ?Sized>(config: &NeuralNetConfig, rng: &mut R) -> Self {
        let hidden = DenseLayer::random(config.input_neurons(), config.hidden_neurons(), rng);
        let output = DenseLayer::random(config.hidden_neurons(), config.output_neurons(), rng);
        Self { hidden, output }
    }

    /// Returns the hidden activations and the network output.
    fn forward(&self, inputs: &Matrix2<f64>) -> Result<(Matrix2<f64>, Matrix2<f64>)> {
        let hidden = self.hidden.run_batch(inputs)?;
        let output = self.output.run_batch(&hidden)?;
        Ok((hidden, output))
    }
}

impl NeuralNet {
    /// Creates an untrained network. No parameters are allocated until `train`.
    pub fn new(config: NeuralNetConfig) -> Self {
        Self {
            config,
            layers: None,
        }
    }

    pub fn config(&self) -> &NeuralNetConfig {
        &self.config
    }

    pub fn is_trained(&self) -> bool {
        self.layers.is_some()
    }

    pub fn hidden_layer(&self) -> Option<&DenseLayer> {
        self.layers.as_ref().map(|l| &l.hidden)
    }

    pub fn output_layer(&self) -> Option<&DenseLayer> {
        self.layers.as_ref().map(|l| &l.output)
    }

    /// Trains from a fresh random initialization.
    /// Uses the configured seed if there is one, entropy otherwise.
    pub fn train(&mut self, inputs: &Matrix2<f64>, labels: &Matrix2<f64>) -> Result<()> {
        let mut rng = match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.train_with_rng(&mut rng, inputs, labels)
    }

    /// Trains from parameters drawn from `rng`.
    /// On error the previous parameters, if any, are left untouched.
    pub fn train_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        inputs: &Matrix2<f64>,
        labels: &Matrix2<f64>,
    ) -> Result<()> {
        self.check_training_data(inputs, labels)?;

        let mut layers = Layers::random(&self.config, rng);
        log::debug!(
            "initialized {}-{}-{} network for {} samples",
            self.config.input_neurons(),
            self.config.hidden_neurons(),
            self.config.output_neurons(),
            inputs.rows()
        );

        Backprop::new(&self.config).train(&mut layers, inputs, labels)?;

        self.layers = Some(layers);
        Ok(())
    }

    /// Propogates a batch of inputs through the trained network.
    pub fn predict(&self, inputs: &Matrix2<f64>) -> Result<Matrix2<f64>> {
        let layers = self.layers.as_ref().ok_or(Error::UntrainedModel)?;
        let (_, output) = layers.forward(inputs)?;
        Ok(output)
    }

    /// Mean-squared error of the current predictions
    pub fn mean_squared_error(&self, inputs: &Matrix2<f64>, targets: &Matrix2<f64>) -> Result<f64> {
        metrics::mean_squared_error(&self.predict(inputs)?, targets)
    }

    fn check_training_data(&self, inputs: &Matrix2<f64>, labels: &Matrix2<f64>) -> Result<()> {
        if inputs.cols() != self.config.input_neurons() {
            return Err(Error::DimensionMismatch {
                lhs: inputs.dim(),
                rhs: (inputs.rows(), self.config.input_neurons()),
            });
        }
        if labels.cols() != self.config.output_neurons() {
            return Err(Error::DimensionMismatch {
                lhs: labels.dim(),
                rhs: (labels.rows(), self.config.output_neurons()),
            });
        }
        if inputs.rows() != labels.rows() {
            return Err(Error::DimensionMismatch {
                lhs: inputs.dim(),
                rhs: labels.dim(),
            });
        }
        Ok(())
    }
}
