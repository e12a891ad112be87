use kornia_imgproc::warp::get_rotation_matrix2d_batch;
use kornia_tensor::{Tensor1, Tensor2, Tensor3};

use crate::error::AugmentationError;

/// Returns a batch of one 3x3 identity matrix with shape (1, 3, 3).
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::identity_matrix;
///
/// let eye = identity_matrix();
/// assert_eq!(eye.shape, [1, 3, 3]);
/// assert_eq!(eye.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn identity_matrix() -> Tensor3<f32> {
    repeat_identity(1)
}

/// Returns `batch_size` 3x3 identity matrices with shape (B, 3, 3).
pub fn repeat_identity(batch_size: usize) -> Tensor3<f32> {
    Tensor3::from_shape_fn([batch_size, 3, 3], |[_, i, j]| if i == j { 1.0 } else { 0.0 })
}

/// Pads a batch of 2x3 affine matrices to 3x3 homogeneous matrices.
///
/// # Arguments
///
/// * `matrix` - The affine matrices with shape (B, 2, 3).
///
/// # Returns
///
/// The homogeneous matrices with shape (B, 3, 3), last row `[0, 0, 1]`.
pub fn convert_to_homogeneous(matrix: &Tensor3<f32>) -> Result<Tensor3<f32>, AugmentationError> {
    let [batch, rows, cols] = matrix.shape;
    if rows != 2 || cols != 3 {
        return Err(AugmentationError::InvalidShape {
            name: "affine matrix",
            expected: "(B, 2, 3)",
            actual: matrix.shape.to_vec(),
        });
    }

    let data = matrix
        .as_slice()
        .chunks_exact(6)
        .flat_map(|m| [m[0], m[1], m[2], m[3], m[4], m[5], 0.0, 0.0, 1.0])
        .collect();

    Ok(Tensor3::from_shape_vec([batch, 3, 3], data)?)
}

/// Extracts the top-left 2x3 block of a batch of homogeneous matrices.
///
/// # Arguments
///
/// * `matrix` - The homogeneous matrices with shape (B, 3, 3).
///
/// # Returns
///
/// The affine matrices with shape (B, 2, 3).
pub fn affine_from_homogeneous(matrix: &Tensor3<f32>) -> Result<Tensor3<f32>, AugmentationError> {
    let [batch, rows, cols] = matrix.shape;
    if rows != 3 || cols != 3 {
        return Err(AugmentationError::InvalidShape {
            name: "homogeneous matrix",
            expected: "(B, 3, 3)",
            actual: matrix.shape.to_vec(),
        });
    }

    let data = matrix
        .as_slice()
        .chunks_exact(9)
        .flat_map(|m| m[..6].iter().copied())
        .collect();

    Ok(Tensor3::from_shape_vec([batch, 2, 3], data)?)
}

/// Builds homogeneous rotation matrices about the given centers.
///
/// # Arguments
///
/// * `angle` - The rotation angles in degrees with shape (B). Positive values mean anti-clockwise.
/// * `center` - The rotation centers with shape (B, 2), last dimension (cx, cy).
///
/// # Returns
///
/// The rotation matrices with shape (B, 3, 3).
///
/// # Errors
///
/// If the center is not (B, 2) with the same batch size as the angle.
pub fn rotation_matrix(
    angle: &Tensor1<f32>,
    center: &Tensor2<f32>,
) -> Result<Tensor3<f32>, AugmentationError> {
    check_center_width(center)?;
    if center.shape[0] != angle.shape[0] {
        return Err(AugmentationError::BatchSizeMismatch {
            name: "center",
            expected: angle.shape[0],
            actual: center.shape[0],
        });
    }

    let scale = Tensor1::from_shape_val(angle.shape, 1.0);
    let matrix = get_rotation_matrix2d_batch(center, angle, &scale)?;

    convert_to_homogeneous(&matrix)
}

/// Builds homogeneous translation matrices.
///
/// # Arguments
///
/// * `translation` - The translations in pixels with shape (B, 2), last dimension (dx, dy).
///
/// # Returns
///
/// The translation matrices with shape (B, 3, 3).
///
/// # Example
///
/// ```
/// use kornia_augmentation::affine::translation_matrix;
/// use kornia_tensor::Tensor2;
///
/// let t = Tensor2::from_shape_vec([1, 2], vec![2.0, -1.0]).unwrap();
/// let m = translation_matrix(&t).unwrap();
/// assert_eq!(m.as_slice(), &[1.0, 0.0, 2.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn translation_matrix(translation: &Tensor2<f32>) -> Result<Tensor3<f32>, AugmentationError> {
    let [batch, dims] = translation.shape;
    if dims != 2 {
        return Err(AugmentationError::InvalidShape {
            name: "translation",
            expected: "(B, 2)",
            actual: translation.shape.to_vec(),
        });
    }

    let mut matrix = repeat_identity(batch);
    matrix
        .as_slice_mut()
        .chunks_exact_mut(9)
        .zip(translation.as_slice().chunks_exact(2))
        .for_each(|(m, t)| {
            m[2] += t[0];
            m[5] += t[1];
        });

    Ok(matrix)
}

/// Expands a (1, 2) or (B, 2) center to (B, 2).
pub fn broadcast_center(
    center: &Tensor2<f32>,
    batch_size: usize,
) -> Result<Tensor2<f32>, AugmentationError> {
    check_center_width(center)?;
    match center.shape[0] {
        b if b == batch_size => Ok(center.clone()),
        1 => Ok(Tensor2::from_shape_vec(
            [batch_size, 2],
            center.as_slice().repeat(batch_size),
        )?),
        b => Err(AugmentationError::BatchSizeMismatch {
            name: "center",
            expected: batch_size,
            actual: b,
        }),
    }
}

fn check_center_width(center: &Tensor2<f32>) -> Result<(), AugmentationError> {
    if center.shape[1] != 2 {
        return Err(AugmentationError::InvalidShape {
            name: "center",
            expected: "(B, 2)",
            actual: center.shape.to_vec(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;
    use kornia_tensor::ops::bmm;

    #[test]
    fn identity_repeat_leaves_points() -> Result<(), AugmentationError> {
        for batch in [1, 2, 5] {
            let eye = repeat_identity(batch);
            let points = Tensor3::from_shape_fn([batch, 3, 2], |[b, i, j]| {
                if i == 2 {
                    1.0
                } else {
                    (b * 10 + i * 3 + j) as f32 - 4.5
                }
            });
            assert_eq!(bmm(&eye, &points)?.as_slice(), points.as_slice());
        }
        Ok(())
    }

    #[test]
    fn homogeneous_padding() -> Result<(), AugmentationError> {
        let m = Tensor3::from_shape_vec(
            [2, 2, 3],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
        )?;
        let h = convert_to_homogeneous(&m)?;
        assert_eq!(h.shape, [2, 3, 3]);
        assert_eq!(
            h.as_slice(),
            &[
                1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 1.0, //
                7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 0.0, 0.0, 1.0
            ]
        );
        assert_eq!(affine_from_homogeneous(&h)?.as_slice(), m.as_slice());

        let err = convert_to_homogeneous(&h).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        Ok(())
    }

    #[test]
    fn zero_rotation_is_identity() -> Result<(), AugmentationError> {
        let angle = Tensor1::from_shape_vec([3], vec![0.0, 0.0, 0.0])?;
        let center = Tensor2::from_shape_vec([3, 2], vec![0.0, 0.0, 12.5, -3.0, 100.0, 7.0])?;
        let m = rotation_matrix(&angle, &center)?;
        assert_eq!(m.as_slice(), repeat_identity(3).as_slice());
        Ok(())
    }

    #[test]
    fn rotation_keeps_center_fixed() -> Result<(), AugmentationError> {
        let angle = Tensor1::from_shape_vec([1], vec![37.0])?;
        let center = Tensor2::from_shape_vec([1, 2], vec![4.0, 2.5])?;
        let m = rotation_matrix(&angle, &center)?;
        let p = Tensor3::from_shape_vec([1, 3, 1], vec![4.0, 2.5, 1.0])?;
        let q = bmm(&m, &p)?;
        assert_abs_diff_eq!(q.as_slice()[0], 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(q.as_slice()[1], 2.5, epsilon = 1e-5);
        assert_abs_diff_eq!(q.as_slice()[2], 1.0);
        Ok(())
    }

    #[test]
    fn rotation_batch_mismatch() -> Result<(), AugmentationError> {
        let angle = Tensor1::from_shape_vec([2], vec![10.0, 20.0])?;
        let center = Tensor2::from_shape_vec([3, 2], vec![0.0; 6])?;
        assert_eq!(
            rotation_matrix(&angle, &center),
            Err(AugmentationError::BatchSizeMismatch {
                name: "center",
                expected: 2,
                actual: 3
            })
        );
        Ok(())
    }

    #[test]
    fn translation_moves_points() -> Result<(), AugmentationError> {
        let t = Tensor2::from_shape_vec([2, 2], vec![1.5, -2.0, 0.0, 3.0])?;
        let m = translation_matrix(&t)?;
        let p = Tensor3::from_shape_vec([2, 3, 1], vec![10.0, 20.0, 1.0, -1.0, -1.0, 1.0])?;
        let q = bmm(&m, &p)?;
        assert_eq!(q.as_slice(), &[11.5, 18.0, 1.0, -1.0, 2.0, 1.0]);

        let bad = Tensor2::from_shape_vec([1, 3], vec![1.0, 2.0, 3.0])?;
        assert_eq!(translation_matrix(&bad).unwrap_err().kind(), ErrorKind::Shape);
        Ok(())
    }

    #[test]
    fn center_broadcast() -> Result<(), AugmentationError> {
        let c = Tensor2::from_shape_vec([1, 2], vec![1.0, 2.0])?;
        let c3 = broadcast_center(&c, 3)?;
        assert_eq!(c3.shape, [3, 2]);
        assert_eq!(c3.as_slice(), &[1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
        assert!(broadcast_center(&c3, 2).is_err());
        Ok(())
    }
}
