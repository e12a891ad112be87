#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `kornia-tensor` provides an owned, contiguous, row-major tensor whose rank
//! is a const generic. It is the numeric backend for image batches
//! (`[B, C, H, W]`) and for batches of transformation matrices (`[B, 3, 3]`).
//!
//! # Quick Start
//!
//! ```rust
//! use kornia_tensor::{ops::bmm, Tensor3};
//!
//! let identity = Tensor3::<f32>::from_shape_fn([1, 3, 3], |[_, i, j]| {
//!     if i == j { 1.0 } else { 0.0 }
//! });
//! let point = Tensor3::<f32>::from_shape_vec([1, 3, 1], vec![2.0, 5.0, 1.0]).unwrap();
//!
//! let moved = bmm(&identity, &point).unwrap();
//! assert_eq!(moved.as_slice(), point.as_slice());
//! ```

/// Operations over tensors, e.g. batched matrix multiplication.
pub mod ops;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

pub use crate::tensor::{Tensor, TensorError};

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;

/// Type alias for a 4-dimensional tensor.
pub type Tensor4<T> = Tensor<T, 4>;
