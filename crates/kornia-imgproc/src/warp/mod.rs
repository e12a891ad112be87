//! Geometric image transformations using affine warps.
//!
//! This module provides the primitives to apply 2D affine transformations to
//! batches of images laid out as `[B, C, H, W]` tensors:
//!
//! - Rotation matrix generation, single and batched
//! - Affine transform inversion
//! - Affine warping with nearest or bilinear interpolation
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```no_run
//! use kornia_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((128.0, 128.0), 45.0, 1.0);
//! // Use with warp_affine to rotate the image
//! ```

mod affine;

pub use affine::{
    get_rotation_matrix2d, get_rotation_matrix2d_batch, invert_affine_transform, warp_affine,
};
