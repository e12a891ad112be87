//! Affine augmentations: rotation and translation of batched image tensors.
//!
//! The module is organised in three layers:
//!
//! - pure builders of batched 3x3 homogeneous matrices ([`rotation_matrix`], [`translation_matrix`], ...)
//! - holders of a generated matrix, deterministic ([`RotationMatrix`], [`TranslationMatrix`]) or
//!   re-sampled on every use ([`RandomRotationMatrix`], [`RandomTranslationMatrix`])
//! - image operations warping tensors through those matrices ([`rotate`], [`translate`], [`affine`])
//!
//! Matrices are `[B, 3, 3]` tensors, their affine part `[B, 2, 3]`. Images are
//! `[C, H, W]` or `[B, C, H, W]`.

mod functional;
mod matrix;
mod ops;
mod random;
mod transform;

pub use functional::{affine, affine_with_interpolation, compute_rotation_center, rotate, translate};
pub use matrix::{
    affine_from_homogeneous, broadcast_center, convert_to_homogeneous, identity_matrix,
    repeat_identity, rotation_matrix, translation_matrix,
};
pub use ops::{Rotate, Translate};
pub use random::{
    sample_angles, sample_rotation_matrix, sample_translation_matrix, sample_translations,
    RandomRotationMatrix, RandomTranslationMatrix, SamplingRange,
};
pub use transform::{MatrixState, MatrixTransform, RotationMatrix, TranslationMatrix};
