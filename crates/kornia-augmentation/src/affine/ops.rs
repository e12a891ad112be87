use kornia_tensor::{Tensor, Tensor1, Tensor2};

use super::functional::{rotate, translate};
use crate::error::AugmentationError;

/// Rotate the image anti-clockwise about the center.
///
/// Holds the parameters of [`rotate`] so the same rotation can be applied to
/// several tensors.
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::Rotate;
/// use kornia_tensor::{Tensor1, Tensor4};
///
/// let op = Rotate::new(Tensor1::from_shape_vec([2], vec![30.0, -30.0]).unwrap(), None);
/// let image = Tensor4::<f32>::zeros([2, 3, 8, 8]);
/// assert_eq!(op.forward(&image).unwrap().shape, [2, 3, 8, 8]);
/// assert_eq!(op.to_string(), "Rotate(angle=[30.0000, -30.0000], center=None)");
/// ```
#[derive(Clone, Debug)]
pub struct Rotate {
    angle: Tensor1<f32>,
    center: Option<Tensor2<f32>>,
}

impl Rotate {
    /// Creates the operator from angles (B) in degrees and optional centers (1, 2) or (B, 2).
    pub fn new(angle: Tensor1<f32>, center: Option<Tensor2<f32>>) -> Self {
        Self { angle, center }
    }

    /// Rotates `input` with shape (C, H, W) or (B, C, H, W).
    pub fn forward<const N: usize>(
        &self,
        input: &Tensor<f32, N>,
    ) -> Result<Tensor<f32, N>, AugmentationError> {
        rotate(input, &self.angle, self.center.as_ref())
    }
}

impl std::fmt::Display for Rotate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rotate(angle={}, center=", self.angle)?;
        match &self.center {
            Some(center) => write!(f, "{center})"),
            None => write!(f, "None)"),
        }
    }
}

/// Translate the tensor in pixel units.
#[derive(Clone, Debug)]
pub struct Translate {
    translation: Tensor2<f32>,
}

impl Translate {
    /// Creates the operator from translations (B, 2), last dimension (dx, dy).
    pub fn new(translation: Tensor2<f32>) -> Self {
        Self { translation }
    }

    /// Translates `input` with shape (C, H, W) or (B, C, H, W).
    pub fn forward<const N: usize>(
        &self,
        input: &Tensor<f32, N>,
    ) -> Result<Tensor<f32, N>, AugmentationError> {
        translate(input, &self.translation)
    }
}

impl std::fmt::Display for Translate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Translate(translation={})", self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kornia_tensor::Tensor3;

    #[test]
    fn translate_forward_matches_function() -> Result<(), AugmentationError> {
        let image = Tensor3::from_shape_fn([2, 3, 3], |[c, y, x]| (c * 9 + y * 3 + x) as f32);
        let t = Tensor2::from_shape_vec([1, 2], vec![1.0, 1.0])?;
        let op = Translate::new(t.clone());
        assert_eq!(op.forward(&image)?, translate(&image, &t)?);
        assert_eq!(
            op.to_string(),
            "Translate(translation=[[1.0000, 1.0000]])"
        );
        Ok(())
    }

    #[test]
    fn rotate_display_with_center() -> Result<(), AugmentationError> {
        let op = Rotate::new(
            Tensor1::from_shape_vec([1], vec![45.0])?,
            Some(Tensor2::from_shape_vec([1, 2], vec![1.0, 2.0])?),
        );
        assert_eq!(
            op.to_string(),
            "Rotate(angle=[45.0000], center=[[1.0000, 2.0000]])"
        );
        Ok(())
    }
}
