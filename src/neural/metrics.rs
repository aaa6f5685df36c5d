//! Evaluation helpers for predictions made by a trained network.

use crate::{matrix::Matrix2, prelude::*};

/// Mean of the squared element-wise differences. Zero for empty matrices.
pub fn mean_squared_error(outputs: &Matrix2<f64>, targets: &Matrix2<f64>) -> Result<f64> {
    let diff = (outputs - targets)?;
    if diff.is_empty() {
        return Ok(0.0);
    }

    let sum: f64 = diff.iter().map(|d| d * d).sum();
    Ok(sum / (targets.rows() * targets.cols()) as f64)
}

/// Fraction of rows where the prediction is largest at the labelled class.
///
/// The class of a one-hot row is its first column equal to 1.0 (column 0 if
/// none is). A row counts as correct when the prediction at that column equals
/// the row maximum, so ties count in favour of the label. Zero for empty input.
pub fn accuracy(predictions: &Matrix2<f64>, labels: &Matrix2<f64>) -> Result<f64> {
    if predictions.dim() != labels.dim() {
        return Err(Error::DimensionMismatch {
            lhs: predictions.dim(),
            rhs: labels.dim(),
        });
    }
    if predictions.rows() == 0 {
        return Ok(0.0);
    }

    let mut correct = 0;
    for i in 0..predictions.rows() {
        let class = labels.row(i).iter().position(|&l| l == 1.0).unwrap_or(0);
        let row = predictions.row(i);
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if row.get(class) == Some(&max) {
            correct += 1;
        }
    }

    Ok(correct as f64 / predictions.rows() as f64)
}

/// Encodes class indices as a classes.len() x n_classes one-hot matrix.
pub fn one_hot(classes: &[usize], n_classes: usize) -> Result<Matrix2<f64>> {
    if classes.iter().any(|&c| c >= n_classes) {
        return Err(Error::InvalidConfig("class index out of range"));
    }

    Ok(Matrix2::from_fn(classes.len(), n_classes, |row, col| {
        if classes[row] == col {
            1.0
        } else {
            0.0
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neural::{config::NeuralNetConfig, NeuralNet};

    /// Two well separated clusters, 25 points each, with one-hot labels.
    fn two_clusters() -> (Matrix2<f64>, Matrix2<f64>) {
        let mut input = Vec::new();
        let mut classes = Vec::new();

        for k in 0..25 {
            let t = k as f64 / 24.0;
            let jitter_a = ((k * 7) % 25) as f64 / 24.0;
            let jitter_b = ((k * 11) % 25) as f64 / 24.0;

            input.push(vec![0.1 + 0.3 * t, 0.4 - 0.3 * jitter_a]);
            classes.push(0);
            input.push(vec![0.6 + 0.3 * t, 0.9 - 0.3 * jitter_b]);
            classes.push(1);
        }

        (
            Matrix2::from_vec(input).unwrap(),
            one_hot(&classes, 2).unwrap(),
        )
    }

    #[test]
    fn accuracy_counts_argmax_hits() {
        let predictions = Matrix2::from_array([[0.9, 0.1], [0.3, 0.7], [0.6, 0.4], [0.5, 0.5]]);
        let labels = Matrix2::from_array([[1.0, 0.0], [0.0, 1.0], [0.0, 1.0], [0.0, 1.0]]);

        // last row is a tie and counts
        assert_eq!(accuracy(&predictions, &labels), Ok(0.75));
    }

    #[test]
    fn accuracy_shape_mismatch() {
        let predictions = Matrix2::from_array([[0.9, 0.1]]);
        let labels = Matrix2::from_array([[1.0, 0.0, 0.0]]);

        assert!(matches!(
            accuracy(&predictions, &labels),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn mse() {
        let outputs = Matrix2::from_array([[0.5, 1.0], [0.0, 0.0]]);
        let targets = Matrix2::from_array([[1.0, 1.0], [0.0, 1.0]]);

        assert_eq!(mean_squared_error(&outputs, &targets), Ok(0.3125));
        assert!(mean_squared_error(&outputs, &Matrix2::new(1, 2)).is_err());
    }

    #[test]
    fn one_hot_encoding() {
        let encoded = one_hot(&[2, 0, 1], 3).unwrap();
        assert_eq!(
            encoded.to_vec(),
            [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );

        assert_eq!(
            one_hot(&[0, 3], 3),
            Err(Error::InvalidConfig("class index out of range"))
        );
    }

    #[test]
    fn separable_clusters_beat_chance() {
        let (inputs, labels) = two_clusters();
        let config = NeuralNetConfig::new(2, 2, 3, 1_000, 0.3)
            .unwrap()
            .with_seed(17);

        let mut net = NeuralNet::new(config);
        net.train(&inputs, &labels).unwrap();

        let acc = accuracy(&net.predict(&inputs).unwrap(), &labels).unwrap();
        println!("Accuracy = {acc}");
        assert!(acc > 0.5);
    }
}
