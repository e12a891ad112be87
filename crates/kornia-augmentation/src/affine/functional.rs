use kornia_imgproc::{image::ImageSize, interpolation::InterpolationMode, warp::warp_affine};
use kornia_tensor::{Tensor, Tensor1, Tensor2, Tensor3};

use super::matrix::broadcast_center;
use super::transform::{MatrixTransform, RotationMatrix, TranslationMatrix};
use crate::error::AugmentationError;

/// Returns the batch size of a CxHxW (1) or BxCxHxW tensor.
fn batch_size<const N: usize>(tensor: &Tensor<f32, N>) -> Result<usize, AugmentationError> {
    match tensor.shape.as_slice() {
        [_, _, _] => Ok(1),
        [b, _, _, _] => Ok(*b),
        shape => Err(AugmentationError::InvalidTensorRank(shape.to_vec())),
    }
}

/// Computes the natural rotation center `((W - 1) / 2, (H - 1) / 2)` of an image tensor.
///
/// # Returns
///
/// The center with shape (1, 2).
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::compute_rotation_center;
/// use kornia_tensor::Tensor3;
///
/// let image = Tensor3::<f32>::zeros([3, 5, 8]);
/// let center = compute_rotation_center(&image).unwrap();
/// assert_eq!(center.as_slice(), &[3.5, 2.0]);
/// ```
pub fn compute_rotation_center<const N: usize>(
    tensor: &Tensor<f32, N>,
) -> Result<Tensor2<f32>, AugmentationError> {
    let (height, width) = match tensor.shape.as_slice() {
        [.., h, w] => (*h, *w),
        shape => return Err(AugmentationError::InvalidTensorRank(shape.to_vec())),
    };
    let center_x = (width as f32 - 1.0) / 2.0;
    let center_y = (height as f32 - 1.0) / 2.0;
    Ok(Tensor2::from_shape_vec([1, 2], vec![center_x, center_y])?)
}

/// Rotate the image anti-clockwise about the center.
///
/// # Arguments
///
/// * `tensor` - The image tensor with shape (C, H, W) or (B, C, H, W).
/// * `angle` - The angles in degrees with shape (B), B = 1 for an unbatched tensor.
/// * `center` - The centers with shape (1, 2) or (B, 2), last dimension (cx, cy).
///   Defaults to the image center.
///
/// # Returns
///
/// The rotated tensor with the same shape as the input.
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::rotate;
/// use kornia_tensor::{Tensor1, Tensor3};
///
/// let image = Tensor3::<f32>::from_shape_val([1, 4, 4], 1.0);
/// let angle = Tensor1::from_shape_vec([1], vec![90.0]).unwrap();
/// let rotated = rotate(&image, &angle, None).unwrap();
/// assert_eq!(rotated.shape, [1, 4, 4]);
/// ```
pub fn rotate<const N: usize>(
    tensor: &Tensor<f32, N>,
    angle: &Tensor1<f32>,
    center: Option<&Tensor2<f32>>,
) -> Result<Tensor<f32, N>, AugmentationError> {
    let batch = batch_size(tensor)?;
    if angle.shape[0] != batch {
        return Err(AugmentationError::BatchSizeMismatch {
            name: "angle",
            expected: batch,
            actual: angle.shape[0],
        });
    }

    // compute the rotation center
    let center = match center {
        Some(center) => broadcast_center(center, batch)?,
        None => broadcast_center(&compute_rotation_center(tensor)?, batch)?,
    };

    log::debug!("rotating tensor of shape {:?}", tensor.shape);

    let rotation = RotationMatrix::new(angle.clone(), center)?;

    // warp using the affine transform
    affine(tensor, &rotation.affine()?)
}

/// Translate the tensor in pixel units.
///
/// # Arguments
///
/// * `tensor` - The image tensor with shape (C, H, W) or (B, C, H, W).
/// * `translation` - The translations with shape (B, 2), last dimension (dx, dy).
///
/// # Returns
///
/// The translated tensor with the same shape as the input.
pub fn translate<const N: usize>(
    tensor: &Tensor<f32, N>,
    translation: &Tensor2<f32>,
) -> Result<Tensor<f32, N>, AugmentationError> {
    let batch = batch_size(tensor)?;
    if translation.shape[1] != 2 {
        return Err(AugmentationError::InvalidShape {
            name: "translation",
            expected: "(B, 2)",
            actual: translation.shape.to_vec(),
        });
    }
    if translation.shape[0] != batch {
        return Err(AugmentationError::BatchSizeMismatch {
            name: "translation",
            expected: batch,
            actual: translation.shape[0],
        });
    }

    log::debug!("translating tensor of shape {:?}", tensor.shape);

    let translation = TranslationMatrix::new(translation.clone())?;

    affine(tensor, &translation.affine()?)
}

/// Apply an affine transformation to the image with bilinear interpolation.
///
/// # Arguments
///
/// * `tensor` - The image tensor with shape (C, H, W) or (B, C, H, W).
/// * `matrix` - The 2x3 affine matrices with shape (B, 2, 3).
///
/// # Returns
///
/// The warped tensor with the same shape as the input.
pub fn affine<const N: usize>(
    tensor: &Tensor<f32, N>,
    matrix: &Tensor3<f32>,
) -> Result<Tensor<f32, N>, AugmentationError> {
    affine_with_interpolation(tensor, matrix, InterpolationMode::Bilinear)
}

/// Apply an affine transformation to the image.
///
/// Unbatched tensors are warped as a batch of one; the output keeps the rank
/// and shape of the input.
pub fn affine_with_interpolation<const N: usize>(
    tensor: &Tensor<f32, N>,
    matrix: &Tensor3<f32>,
    interpolation: InterpolationMode,
) -> Result<Tensor<f32, N>, AugmentationError> {
    // warping needs data in the shape of BCHW
    let batched_shape = match tensor.shape.as_slice() {
        &[c, h, w] => [1, c, h, w],
        &[b, c, h, w] => [b, c, h, w],
        shape => return Err(AugmentationError::InvalidTensorRank(shape.to_vec())),
    };

    if matrix.shape[1] != 2 || matrix.shape[2] != 3 {
        return Err(AugmentationError::InvalidShape {
            name: "affine matrix",
            expected: "(B, 2, 3)",
            actual: matrix.shape.to_vec(),
        });
    }
    if matrix.shape[0] != batched_shape[0] {
        return Err(AugmentationError::BatchSizeMismatch {
            name: "affine matrix",
            expected: batched_shape[0],
            actual: matrix.shape[0],
        });
    }

    let [_, _, height, width] = batched_shape;
    let batched = tensor.clone().reshape(batched_shape)?;

    let warped = warp_affine(&batched, matrix, ImageSize { width, height }, interpolation)?;

    // return in the original shape
    Ok(warped.reshape(tensor.shape)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use kornia_tensor::{Tensor4, TensorError};

    #[test]
    fn rotation_center_defaults() -> Result<(), AugmentationError> {
        let image = Tensor4::<f32>::zeros([2, 1, 4, 6]);
        let center = compute_rotation_center(&image)?;
        assert_eq!(center.shape, [1, 2]);
        assert_eq!(center.as_slice(), &[2.5, 1.5]);
        Ok(())
    }

    #[test]
    fn rank_is_checked() -> Result<(), TensorError> {
        let image = Tensor2::<f32>::zeros([4, 4]);
        let angle = Tensor1::from_shape_vec([1], vec![0.0])?;
        let err = rotate(&image, &angle, None).unwrap_err();
        assert_eq!(err, AugmentationError::InvalidTensorRank(vec![4, 4]));
        assert_eq!(err.kind(), ErrorKind::Shape);

        let translation = Tensor2::from_shape_vec([1, 2], vec![0.0, 0.0])?;
        let image = Tensor::<f32, 5>::zeros([1, 1, 1, 2, 2]);
        assert_eq!(
            translate(&image, &translation).unwrap_err().kind(),
            ErrorKind::Shape
        );
        Ok(())
    }

    #[test]
    fn unbatched_rotate_needs_single_angle() -> Result<(), TensorError> {
        let image = Tensor3::<f32>::zeros([1, 3, 3]);
        let angle = Tensor1::from_shape_vec([2], vec![0.0, 1.0])?;
        assert_eq!(
            rotate(&image, &angle, None),
            Err(AugmentationError::BatchSizeMismatch {
                name: "angle",
                expected: 1,
                actual: 2
            })
        );
        Ok(())
    }

    #[test]
    fn center_shape_is_checked() -> Result<(), TensorError> {
        let image = Tensor4::<f32>::zeros([2, 1, 3, 3]);
        let angle = Tensor1::from_shape_vec([2], vec![0.0, 1.0])?;

        let center = Tensor2::from_shape_vec([1, 3], vec![0.0, 1.0, 2.0])?;
        assert!(matches!(
            rotate(&image, &angle, Some(&center)),
            Err(AugmentationError::InvalidShape { name: "center", .. })
        ));

        let center = Tensor2::from_shape_vec([3, 2], vec![0.0; 6])?;
        assert!(matches!(
            rotate(&image, &angle, Some(&center)),
            Err(AugmentationError::BatchSizeMismatch { name: "center", .. })
        ));
        Ok(())
    }

    #[test]
    fn translate_shifts_pixels() -> Result<(), AugmentationError> {
        let image = Tensor3::from_shape_vec([1, 2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let translation = Tensor2::from_shape_vec([1, 2], vec![1.0, 0.0])?;
        let out = translate(&image, &translation)?;
        assert_eq!(out.shape, [1, 2, 3]);
        assert_eq!(out.as_slice(), &[0.0, 1.0, 2.0, 0.0, 4.0, 5.0]);

        let translation = Tensor2::from_shape_vec([1, 2], vec![0.0, 1.0])?;
        let out = translate(&image, &translation)?;
        assert_eq!(out.as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn translate_batch_mismatch() -> Result<(), TensorError> {
        let image = Tensor4::<f32>::zeros([3, 1, 2, 2]);
        let translation = Tensor2::from_shape_vec([2, 2], vec![0.0; 4])?;
        assert_eq!(
            translate(&image, &translation).unwrap_err(),
            AugmentationError::BatchSizeMismatch {
                name: "translation",
                expected: 3,
                actual: 2
            }
        );
        Ok(())
    }

    #[test]
    fn affine_matrix_shape_is_checked() -> Result<(), TensorError> {
        let image = Tensor3::<f32>::zeros([1, 2, 2]);
        let matrix = Tensor3::<f32>::zeros([1, 3, 3]);
        assert!(matches!(
            affine(&image, &matrix),
            Err(AugmentationError::InvalidShape { .. })
        ));
        let matrix = Tensor3::<f32>::zeros([2, 2, 3]);
        assert!(matches!(
            affine(&image, &matrix),
            Err(AugmentationError::BatchSizeMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn nearest_quarter_turn() -> Result<(), AugmentationError> {
        // rotating the 2x2 plane [[0, 1], [2, 3]] by 90 degrees anti-clockwise
        let image = Tensor3::from_shape_vec([1, 2, 2], vec![0.0, 1.0, 2.0, 3.0])?;
        let m = Tensor3::from_shape_vec(
            [1, 2, 3],
            kornia_imgproc::warp::get_rotation_matrix2d((0.5, 0.5), 90.0, 1.0).to_vec(),
        )?;
        let out = affine_with_interpolation(&image, &m, InterpolationMode::Nearest)?;
        assert_eq!(out.as_slice(), &[1.0, 3.0, 0.0, 2.0]);
        Ok(())
    }
}
