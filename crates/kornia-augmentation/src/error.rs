use kornia_imgproc::ImgprocError;
use kornia_tensor::TensorError;

/// Broad category of an [`AugmentationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A tensor or parameter has the wrong rank, width or batch size.
    Shape,
    /// A parameter has an invalid value.
    Value,
    /// An operation was called before its preconditions were met.
    Precondition,
    /// The tensor backend or the warp primitive failed.
    Backend,
}

/// An error type for the augmentation operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AugmentationError {
    /// The image tensor is neither CxHxW nor BxCxHxW.
    #[error("Invalid tensor shape, we expect CxHxW or BxCxHxW. Got: {0:?}")]
    InvalidTensorRank(Vec<usize>),

    /// A parameter batch does not match the image batch.
    #[error("Input tensor and {name} batch sizes must match. Got tensor: {expected} and {name}: {actual}")]
    BatchSizeMismatch {
        /// The parameter being checked.
        name: &'static str,
        /// The batch size of the image tensor.
        expected: usize,
        /// The batch size of the parameter.
        actual: usize,
    },

    /// A parameter tensor has the wrong shape.
    #[error("Invalid {name} shape, we expect {expected}. Got: {actual:?}")]
    InvalidShape {
        /// The parameter being checked.
        name: &'static str,
        /// Human readable expected layout.
        expected: &'static str,
        /// The shape that was passed.
        actual: Vec<usize>,
    },

    /// A sampling bound was given as a sequence that is not a single number or a pair.
    #[error("If the bound is a sequence, it must be of len 2. Got len: {0}")]
    InvalidBoundLength(usize),

    /// A single sampling bound was negative.
    #[error("If the bound is a single number, it must be non-negative. Got: {0}")]
    NegativeBound(f32),

    /// A sampling range is empty or not finite.
    #[error("Invalid sampling range [{0}, {1}]")]
    InvalidRange(f32, f32),

    /// The matrix of a random transform was read before being sampled.
    #[error("The transformation matrix has not been generated yet")]
    MatrixNotGenerated,

    /// Error with the underlying tensor.
    #[error(transparent)]
    TensorError(#[from] TensorError),

    /// Error from the warp primitive.
    #[error(transparent)]
    ImgprocError(#[from] ImgprocError),
}

impl AugmentationError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTensorRank(_)
            | Self::BatchSizeMismatch { .. }
            | Self::InvalidShape { .. }
            | Self::InvalidBoundLength(_) => ErrorKind::Shape,
            Self::NegativeBound(_) | Self::InvalidRange(..) => ErrorKind::Value,
            Self::MatrixNotGenerated => ErrorKind::Precondition,
            Self::TensorError(_) | Self::ImgprocError(_) => ErrorKind::Backend,
        }
    }
}
