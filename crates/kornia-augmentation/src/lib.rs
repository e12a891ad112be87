#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Quick Start
//!
//! ```rust
//! use kornia_augmentation::affine::{rotate, sample_angles, SamplingRange};
//! use kornia_tensor::Tensor4;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let images = Tensor4::<f32>::from_shape_val([4, 3, 16, 16], 1.0);
//!
//! let range = SamplingRange::symmetric(15.0).unwrap();
//! let angles = sample_angles(&range, 4, &mut rng).unwrap();
//! let rotated = rotate(&images, &angles, None).unwrap();
//! assert_eq!(rotated.shape, images.shape);
//! ```

/// affine augmentations module.
pub mod affine;

/// Error types for the augmentation module.
pub mod error;

pub use crate::error::{AugmentationError, ErrorKind};
