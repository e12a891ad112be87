use kornia_tensor::{Tensor1, Tensor2, Tensor3};
use rand::Rng;

use super::matrix::{broadcast_center, rotation_matrix, translation_matrix};
use super::transform::{apply_matrix, check_points, MatrixState, MatrixTransform};
use crate::error::AugmentationError;

/// A closed interval `[low, high]` to sample parameters uniformly from.
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::SamplingRange;
///
/// let range = SamplingRange::try_from(&[10.0f32][..]).unwrap();
/// assert_eq!((range.low(), range.high()), (-10.0, 10.0));
///
/// let range = SamplingRange::try_from(&[-3.0f32, 7.0][..]).unwrap();
/// assert_eq!((range.low(), range.high()), (-3.0, 7.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingRange {
    low: f32,
    high: f32,
}

impl SamplingRange {
    /// Creates the range `[low, high]`.
    ///
    /// # Errors
    ///
    /// [`AugmentationError::InvalidRange`] if a bound is not finite, `low > high`
    /// or the width `high - low` overflows.
    pub fn new(low: f32, high: f32) -> Result<Self, AugmentationError> {
        if !low.is_finite() || !high.is_finite() || low > high || !(high - low).is_finite() {
            return Err(AugmentationError::InvalidRange(low, high));
        }
        Ok(Self { low, high })
    }

    /// Creates the range `[-bound, bound]`.
    ///
    /// # Errors
    ///
    /// [`AugmentationError::NegativeBound`] if `bound` is negative.
    pub fn symmetric(bound: f32) -> Result<Self, AugmentationError> {
        if bound < 0.0 {
            return Err(AugmentationError::NegativeBound(bound));
        }
        Self::new(-bound, bound)
    }

    /// Lower bound.
    pub fn low(&self) -> f32 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f32 {
        self.high
    }

    /// Returns true if `value` lies in the range.
    pub fn contains(&self, value: f32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Draws one value uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.low..=self.high)
    }
}

impl TryFrom<&[f32]> for SamplingRange {
    type Error = AugmentationError;

    /// A single bound `[d]` gives `[-d, d]`, a pair `[lo, hi]` is taken as is.
    fn try_from(bounds: &[f32]) -> Result<Self, Self::Error> {
        match *bounds {
            [bound] => Self::symmetric(bound),
            [low, high] => Self::new(low, high),
            _ => Err(AugmentationError::InvalidBoundLength(bounds.len())),
        }
    }
}

/// Samples one rotation angle per batch element.
///
/// # Returns
///
/// The angles in degrees with shape (B).
pub fn sample_angles<R: Rng>(
    range: &SamplingRange,
    batch_size: usize,
    rng: &mut R,
) -> Result<Tensor1<f32>, AugmentationError> {
    let data = (0..batch_size).map(|_| range.sample(rng)).collect();
    Ok(Tensor1::from_shape_vec([batch_size], data)?)
}

/// Samples an independent (dx, dy) per batch element.
///
/// # Returns
///
/// The translations with shape (B, 2).
pub fn sample_translations<R: Rng>(
    range: &SamplingRange,
    batch_size: usize,
    rng: &mut R,
) -> Result<Tensor2<f32>, AugmentationError> {
    let data = (0..batch_size * 2).map(|_| range.sample(rng)).collect();
    Ok(Tensor2::from_shape_vec([batch_size, 2], data)?)
}

/// Samples a batch of homogeneous rotation matrices.
///
/// # Arguments
///
/// * `range` - The range of angles in degrees.
/// * `center` - The rotation centers with shape (1, 2) or (B, 2). `None` rotates about the origin.
/// * `batch_size` - The number of matrices to sample.
/// * `rng` - The random number generator.
///
/// # Returns
///
/// The rotation matrices with shape (B, 3, 3).
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::{sample_rotation_matrix, SamplingRange};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let range = SamplingRange::symmetric(30.0).unwrap();
/// let m = sample_rotation_matrix(&range, None, 4, &mut rng).unwrap();
/// assert_eq!(m.shape, [4, 3, 3]);
/// ```
pub fn sample_rotation_matrix<R: Rng>(
    range: &SamplingRange,
    center: Option<&Tensor2<f32>>,
    batch_size: usize,
    rng: &mut R,
) -> Result<Tensor3<f32>, AugmentationError> {
    let angle = sample_angles(range, batch_size, rng)?;
    let center = resolve_center(center, batch_size)?;
    rotation_matrix(&angle, &center)
}

/// Samples a batch of homogeneous translation matrices with shape (B, 3, 3).
pub fn sample_translation_matrix<R: Rng>(
    range: &SamplingRange,
    batch_size: usize,
    rng: &mut R,
) -> Result<Tensor3<f32>, AugmentationError> {
    let translation = sample_translations(range, batch_size, rng)?;
    translation_matrix(&translation)
}

fn resolve_center(
    center: Option<&Tensor2<f32>>,
    batch_size: usize,
) -> Result<Tensor2<f32>, AugmentationError> {
    match center {
        Some(center) => broadcast_center(center, batch_size),
        None => Ok(Tensor2::zeros([batch_size, 2])),
    }
}

/// Rotations with angles drawn anew on every [`RandomRotationMatrix::apply`].
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::{MatrixTransform, RandomRotationMatrix};
/// use kornia_tensor::Tensor3;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut rotation = RandomRotationMatrix::new(&[10.0]).unwrap();
/// assert!(rotation.affine().is_err());
///
/// let points = Tensor3::from_shape_vec([1, 3, 1], vec![1.0, 0.0, 1.0]).unwrap();
/// let rotated = rotation.apply(&points, &mut rng).unwrap();
/// assert_eq!(rotated.shape, [1, 3, 1]);
/// assert!(rotation.affine().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct RandomRotationMatrix {
    degrees: SamplingRange,
    center: Option<Tensor2<f32>>,
    state: MatrixState<Tensor1<f32>>,
}

impl RandomRotationMatrix {
    /// Creates the transform from `[d]` (angles in `[-d, d]`) or `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// If `d` is negative, the pair is not a valid range or the slice is not of length 1 or 2.
    pub fn new(degrees: &[f32]) -> Result<Self, AugmentationError> {
        Ok(Self::from_range(SamplingRange::try_from(degrees)?))
    }

    /// Creates the transform from an already validated range.
    pub fn from_range(degrees: SamplingRange) -> Self {
        Self {
            degrees,
            center: None,
            state: MatrixState::Unbuilt,
        }
    }

    /// Rotates about `center` with shape (1, 2) or (B, 2) instead of the origin.
    pub fn with_center(mut self, center: Tensor2<f32>) -> Self {
        self.center = Some(center);
        self
    }

    /// The range of angles in degrees.
    pub fn degrees(&self) -> SamplingRange {
        self.degrees
    }

    /// The angles sampled by the last [`RandomRotationMatrix::apply`].
    pub fn angle(&self) -> Option<&Tensor1<f32>> {
        self.state.params()
    }

    /// The current matrix state.
    pub fn state(&self) -> &MatrixState<Tensor1<f32>> {
        &self.state
    }

    /// Samples new angles for `batch_size` elements and rebuilds the matrix.
    pub fn generate<R: Rng>(
        &mut self,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<&Tensor3<f32>, AugmentationError> {
        let center = resolve_center(self.center.as_ref(), batch_size)?;
        let angle = sample_angles(&self.degrees, batch_size, rng)?;
        let matrix = rotation_matrix(&angle, &center)?;
        log::debug!(
            "sampled {batch_size} rotation angles in [{}, {}]",
            self.degrees.low(),
            self.degrees.high()
        );
        self.state = MatrixState::Built {
            params: angle,
            matrix,
        };
        self.state.matrix()
    }

    /// Samples one angle per batch element of `input` (B, 3, N) and rotates the points.
    pub fn apply<R: Rng>(
        &mut self,
        input: &Tensor3<f32>,
        rng: &mut R,
    ) -> Result<Tensor3<f32>, AugmentationError> {
        check_points(input)?;
        let matrix = self.generate(input.shape[0], rng)?;
        apply_matrix(matrix, input)
    }
}

impl MatrixTransform for RandomRotationMatrix {
    fn matrix(&self) -> Result<&Tensor3<f32>, AugmentationError> {
        self.state.matrix()
    }
}

/// Translations with offsets drawn anew on every [`RandomTranslationMatrix::apply`].
#[derive(Clone, Debug)]
pub struct RandomTranslationMatrix {
    range: SamplingRange,
    state: MatrixState<Tensor2<f32>>,
}

impl RandomTranslationMatrix {
    /// Creates the transform from `[d]` (offsets in `[-d, d]`) or `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// If `d` is negative, the pair is not a valid range or the slice is not of length 1 or 2.
    pub fn new(translation: &[f32]) -> Result<Self, AugmentationError> {
        Ok(Self::from_range(SamplingRange::try_from(translation)?))
    }

    /// Creates the transform from an already validated range.
    pub fn from_range(range: SamplingRange) -> Self {
        Self {
            range,
            state: MatrixState::Unbuilt,
        }
    }

    /// The range of offsets in pixels, shared by dx and dy.
    pub fn range(&self) -> SamplingRange {
        self.range
    }

    /// The translations sampled by the last [`RandomTranslationMatrix::apply`].
    pub fn translation(&self) -> Option<&Tensor2<f32>> {
        self.state.params()
    }

    /// The current matrix state.
    pub fn state(&self) -> &MatrixState<Tensor2<f32>> {
        &self.state
    }

    /// Samples new offsets for `batch_size` elements and rebuilds the matrix.
    pub fn generate<R: Rng>(
        &mut self,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<&Tensor3<f32>, AugmentationError> {
        let translation = sample_translations(&self.range, batch_size, rng)?;
        let matrix = translation_matrix(&translation)?;
        log::debug!(
            "sampled {batch_size} translations in [{}, {}]",
            self.range.low(),
            self.range.high()
        );
        self.state = MatrixState::Built {
            params: translation,
            matrix,
        };
        self.state.matrix()
    }

    /// Samples one (dx, dy) per batch element of `input` (B, 3, N) and translates the points.
    pub fn apply<R: Rng>(
        &mut self,
        input: &Tensor3<f32>,
        rng: &mut R,
    ) -> Result<Tensor3<f32>, AugmentationError> {
        check_points(input)?;
        let matrix = self.generate(input.shape[0], rng)?;
        apply_matrix(matrix, input)
    }
}

impl MatrixTransform for RandomTranslationMatrix {
    fn matrix(&self) -> Result<&Tensor3<f32>, AugmentationError> {
        self.state.matrix()
    }
}
