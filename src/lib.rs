//! A single hidden layer feedforward network with sigmoid activations,
//! trained by full-batch gradient descent.
//!
//! ```
//! use sigmoid_nn::{matrix::Matrix2, neural::{config::NeuralNetConfig, NeuralNet}};
//!
//! let inputs: Matrix2<f64> = Matrix2::from_array([[0, 0], [0, 1], [1, 0], [1, 1]]).into();
//! let labels: Matrix2<f64> = Matrix2::from_array([[0], [0], [0], [1]]).into();
//!
//! let config = NeuralNetConfig::new(2, 1, 2, 2_000, 0.5)?.with_seed(42);
//! let mut net = NeuralNet::new(config);
//! net.train(&inputs, &labels)?;
//!
//! let out = net.predict(&Matrix2::from_row(vec![1.0, 1.0]))?;
//! assert!(out[(0, 0)] > 0.5);
//! # Ok::<(), sigmoid_nn::prelude::Error>(())
//! ```

pub mod matrix;
pub mod neural;
pub mod prelude;
