use crate::{
    matrix::{
        ops::{Dot, Transpose},
        Matrix2,
    },
    prelude::*,
};

use super::{
    activations::{Activation, Sigmoid},
    config::NeuralNetConfig,
    Layers,
};

/// Full-batch gradient descent driven by backpropagation.
pub(super) struct Backprop {
    epochs: usize,
    epochs_per_log: Option<usize>,
    rate: f64,
}

impl Backprop {
    pub(super) fn new(config: &NeuralNetConfig) -> Self {
        Self {
            epochs: config.epochs(),
            epochs_per_log: config.epochs_per_log(),
            rate: config.learning_rate(),
        }
    }

    /// Runs `epochs` updates over the whole dataset, mutating `layers` in place.
    pub(super) fn train(
        &self,
        layers: &mut Layers,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
    ) -> Result<()> {
        let mut mse = None;
        for i in 0..self.epochs {
            let err = self.backprop_once(layers, inputs, targets)?;
            if self.epochs_per_log.is_some_and(|epl| i % epl == 0) {
                log::info!("Epoch {i} error: {err}");
            }
            mse = Some(err);
        }

        if let Some(err) = mse {
            log::debug!("Finished {} epochs, last error: {err}", self.epochs);
        }
        Ok(())
    }

    /// One forward pass, backward pass and parameter update.
    /// Returns the mean squared error of the forward pass, before the update.
    fn backprop_once(
        &self,
        layers: &mut Layers,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
    ) -> Result<f64> {
        let (hidden_acts, output) = layers.forward(inputs)?;

        // Points from the output towards the targets, so updates are added.
        let network_err = (targets - &output)?;

        let output_slope = output.map_indexed(|_, _, a| Sigmoid.derivative(a));
        let hidden_slope = hidden_acts.map_indexed(|_, _, a| Sigmoid.derivative(a));

        let d_output = network_err.hadamard(&output_slope)?;
        let hidden_err = d_output.dot(&layers.output.weights.transpose())?;
        let d_hidden = hidden_err.hadamard(&hidden_slope)?;

        // Bias gradients are summed over samples, not averaged.
        let w_out_adj = hidden_acts.transpose().dot(&d_output)?.scale(self.rate);
        let b_out_adj = d_output.sum_along_axis(0)?.scale(self.rate);
        let w_hidden_adj = inputs.transpose().dot(&d_hidden)?.scale(self.rate);
        let b_hidden_adj = d_hidden.sum_along_axis(0)?.scale(self.rate);

        let output_layer = &mut layers.output;
        output_layer.weights = (&output_layer.weights + &w_out_adj)?;
        output_layer.biases = (&output_layer.biases + &b_out_adj)?;

        let hidden_layer = &mut layers.hidden;
        hidden_layer.weights = (&hidden_layer.weights + &w_hidden_adj)?;
        hidden_layer.biases = (&hidden_layer.biases + &b_hidden_adj)?;

        let n = network_err.rows() * network_err.cols();
        if n == 0 {
            return Ok(0.0);
        }
        Ok(network_err.iter().map(|e| e * e).sum::<f64>() / n as f64)
    }
}
