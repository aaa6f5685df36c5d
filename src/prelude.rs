use thiserror::Error;

/// Error type for sigmoid_nn
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    #[error("dimension mismatch: {lhs:?} is incompatible with {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Axis passed to a reduction was neither 0 nor 1.
    #[error("invalid axis {0}, must be 0 or 1")]
    InvalidAxis(usize),
    /// `predict` was called before a successful `train`.
    #[error("the network has not been trained")]
    UntrainedModel,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
