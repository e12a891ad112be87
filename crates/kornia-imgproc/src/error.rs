use kornia_tensor::TensorError;

/// An error type for the image processing operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImgprocError {
    /// The transformation matrices do not have the expected shape.
    #[error("Invalid matrix shape: expected {expected:?}, got {actual:?}")]
    InvalidMatrixShape {
        /// The shape the operation expected.
        expected: Vec<usize>,
        /// The shape that was passed.
        actual: Vec<usize>,
    },

    /// The batch dimension of two operands differ.
    #[error("Batch size mismatch: {0} != {1}")]
    BatchSizeMismatch(usize, usize),

    /// Error with the underlying tensor.
    #[error("Error with the tensor: {0}")]
    TensorError(#[from] TensorError),
}
