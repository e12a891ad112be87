#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the image processing module.
pub mod error;

/// image size and plane views over batched tensors.
pub mod image;

/// utilities for interpolation.
pub mod interpolation;

/// image geometric transformations module.
pub mod warp;

pub use crate::error::ImgprocError;
