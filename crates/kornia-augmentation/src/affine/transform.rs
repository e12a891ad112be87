use kornia_tensor::{ops::bmm, Tensor1, Tensor2, Tensor3};

use super::matrix::{affine_from_homogeneous, rotation_matrix, translation_matrix};
use crate::error::AugmentationError;

/// A holder of a batch of 3x3 homogeneous transformation matrices.
pub trait MatrixTransform {
    /// The homogeneous matrices with shape (B, 3, 3).
    ///
    /// # Errors
    ///
    /// [`AugmentationError::MatrixNotGenerated`] if no matrix has been built yet.
    fn matrix(&self) -> Result<&Tensor3<f32>, AugmentationError>;

    /// The top-left 2x3 affine block of [`MatrixTransform::matrix`] with shape (B, 2, 3).
    fn affine(&self) -> Result<Tensor3<f32>, AugmentationError> {
        affine_from_homogeneous(self.matrix()?)
    }
}

/// Whether a transform has produced its matrix yet.
#[derive(Clone, Debug, PartialEq)]
pub enum MatrixState<P> {
    /// No matrix has been generated.
    Unbuilt,
    /// The parameters last sampled and the matrix built from them.
    Built {
        /// The parameters the matrix was built from.
        params: P,
        /// The homogeneous matrices with shape (B, 3, 3).
        matrix: Tensor3<f32>,
    },
}

impl<P> Default for MatrixState<P> {
    fn default() -> Self {
        Self::Unbuilt
    }
}

impl<P> MatrixState<P> {
    /// Returns the built matrix.
    pub fn matrix(&self) -> Result<&Tensor3<f32>, AugmentationError> {
        match self {
            Self::Built { matrix, .. } => Ok(matrix),
            Self::Unbuilt => Err(AugmentationError::MatrixNotGenerated),
        }
    }

    /// Returns the parameters of the built matrix, if any.
    pub fn params(&self) -> Option<&P> {
        match self {
            Self::Built { params, .. } => Some(params),
            Self::Unbuilt => None,
        }
    }

    /// Returns true once a matrix has been generated.
    pub fn is_built(&self) -> bool {
        matches!(self, Self::Built { .. })
    }
}

/// Checks that `input` is a batch of homogeneous column vectors with shape (B, 3, N).
pub(crate) fn check_points(input: &Tensor3<f32>) -> Result<(), AugmentationError> {
    if input.shape[1] != 3 {
        return Err(AugmentationError::InvalidShape {
            name: "points",
            expected: "(B, 3, N)",
            actual: input.shape.to_vec(),
        });
    }
    Ok(())
}

/// Multiplies each homogeneous matrix with the points of the same batch element.
pub(crate) fn apply_matrix(
    matrix: &Tensor3<f32>,
    input: &Tensor3<f32>,
) -> Result<Tensor3<f32>, AugmentationError> {
    check_points(input)?;
    Ok(bmm(matrix, input)?)
}

/// A batch of rotations about given centers.
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::{MatrixTransform, RotationMatrix};
/// use kornia_tensor::{Tensor1, Tensor2};
///
/// let angle = Tensor1::from_shape_vec([1], vec![90.0]).unwrap();
/// let center = Tensor2::from_shape_vec([1, 2], vec![0.0, 0.0]).unwrap();
/// let rotation = RotationMatrix::new(angle, center).unwrap();
/// assert_eq!(rotation.affine().unwrap().shape, [1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct RotationMatrix {
    angle: Tensor1<f32>,
    center: Tensor2<f32>,
    matrix: Tensor3<f32>,
}

impl RotationMatrix {
    /// Creates the rotation matrices for angles (B) in degrees about centers (B, 2).
    pub fn new(angle: Tensor1<f32>, center: Tensor2<f32>) -> Result<Self, AugmentationError> {
        let matrix = rotation_matrix(&angle, &center)?;
        Ok(Self {
            angle,
            center,
            matrix,
        })
    }

    /// The rotation angles in degrees.
    pub fn angle(&self) -> &Tensor1<f32> {
        &self.angle
    }

    /// The rotation centers.
    pub fn center(&self) -> &Tensor2<f32> {
        &self.center
    }

    /// Transforms homogeneous points with shape (B, 3, N).
    pub fn apply(&self, input: &Tensor3<f32>) -> Result<Tensor3<f32>, AugmentationError> {
        apply_matrix(&self.matrix, input)
    }
}

impl MatrixTransform for RotationMatrix {
    fn matrix(&self) -> Result<&Tensor3<f32>, AugmentationError> {
        Ok(&self.matrix)
    }
}

/// A batch of translations in pixels.
#[derive(Clone, Debug)]
pub struct TranslationMatrix {
    translation: Tensor2<f32>,
    matrix: Tensor3<f32>,
}

impl TranslationMatrix {
    /// Creates the translation matrices for translations (B, 2).
    pub fn new(translation: Tensor2<f32>) -> Result<Self, AugmentationError> {
        let matrix = translation_matrix(&translation)?;
        Ok(Self {
            translation,
            matrix,
        })
    }

    /// The translations, last dimension (dx, dy).
    pub fn translation(&self) -> &Tensor2<f32> {
        &self.translation
    }

    /// Transforms homogeneous points with shape (B, 3, N).
    pub fn apply(&self, input: &Tensor3<f32>) -> Result<Tensor3<f32>, AugmentationError> {
        apply_matrix(&self.matrix, input)
    }
}

impl MatrixTransform for TranslationMatrix {
    fn matrix(&self) -> Result<&Tensor3<f32>, AugmentationError> {
        Ok(&self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn state_transitions() -> Result<(), AugmentationError> {
        let mut state = MatrixState::<f32>::default();
        assert!(!state.is_built());
        assert_eq!(state.matrix(), Err(AugmentationError::MatrixNotGenerated));
        assert_eq!(state.params(), None);

        state = MatrixState::Built {
            params: 3.0,
            matrix: Tensor3::zeros([1, 3, 3]),
        };
        assert!(state.is_built());
        assert_eq!(state.params(), Some(&3.0));
        assert_eq!(state.matrix()?.shape, [1, 3, 3]);
        Ok(())
    }

    #[test]
    fn rotation_apply_quarter_turn() -> Result<(), AugmentationError> {
        let angle = Tensor1::from_shape_vec([1], vec![90.0])?;
        let center = Tensor2::from_shape_vec([1, 2], vec![0.0, 0.0])?;
        let rotation = RotationMatrix::new(angle, center)?;

        // (1, 0) -> (0, -1): anti-clockwise with the y axis pointing down
        let p = Tensor3::from_shape_vec([1, 3, 1], vec![1.0, 0.0, 1.0])?;
        let q = rotation.apply(&p)?;
        assert_abs_diff_eq!(q.as_slice()[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(q.as_slice()[1], -1.0, epsilon = 1e-6);

        let affine = rotation.affine()?;
        assert_eq!(affine.shape, [1, 2, 3]);
        assert_eq!(&affine.as_slice()[..], &rotation.matrix()?.as_slice()[..6]);
        Ok(())
    }

    #[test]
    fn translation_apply() -> Result<(), AugmentationError> {
        let t = Tensor2::from_shape_vec([1, 2], vec![3.0, 4.0])?;
        let translation = TranslationMatrix::new(t)?;
        let p = Tensor3::from_shape_vec([1, 3, 2], vec![0.0, 1.0, 0.0, 1.0, 1.0, 1.0])?;
        let q = translation.apply(&p)?;
        assert_eq!(q.as_slice(), &[3.0, 4.0, 4.0, 5.0, 1.0, 1.0]);

        let bad = Tensor3::zeros([1, 2, 2]);
        assert!(matches!(
            translation.apply(&bad),
            Err(AugmentationError::InvalidShape { name: "points", .. })
        ));
        Ok(())
    }
}
