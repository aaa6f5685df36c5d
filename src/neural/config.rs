use crate::prelude::*;

/// Architecture and training hyperparameters of a [`NeuralNet`](super::NeuralNet).
/// Validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetConfig {
    input_neurons: usize,
    output_neurons: usize,
    hidden_neurons: usize,
    epochs: usize,
    learning_rate: f64,
    seed: Option<u64>,
    epochs_per_log: Option<usize>,
}

impl NeuralNetConfig {
    pub fn new(
        input_neurons: usize,
        output_neurons: usize,
        hidden_neurons: usize,
        epochs: usize,
        learning_rate: f64,
    ) -> Result<Self> {
        if input_neurons == 0 {
            return Err(Error::InvalidConfig("input neurons must be positive"));
        }
        if output_neurons == 0 {
            return Err(Error::InvalidConfig("output neurons must be positive"));
        }
        if hidden_neurons == 0 {
            return Err(Error::InvalidConfig("hidden neurons must be positive"));
        }
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(Error::InvalidConfig(
                "learning rate must be positive and finite",
            ));
        }

        Ok(Self {
            input_neurons,
            output_neurons,
            hidden_neurons,
            epochs,
            learning_rate,
            seed: None,
            epochs_per_log: None,
        })
    }

    /// Seed parameter initialization so training is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Log the mean squared error every `epochs_per_log` epochs.
    /// Off by default. Only training progress is logged, errors are returned
    /// to the caller and never logged.
    pub fn with_log(mut self, epochs_per_log: Option<usize>) -> Self {
        self.epochs_per_log = epochs_per_log.filter(|&n| n > 0);
        self
    }

    pub fn input_neurons(&self) -> usize {
        self.input_neurons
    }

    pub fn output_neurons(&self) -> usize {
        self.output_neurons
    }

    pub fn hidden_neurons(&self) -> usize {
        self.hidden_neurons
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn epochs_per_log(&self) -> Option<usize> {
        self.epochs_per_log
    }
}
