use std::f32::consts::PI;

use kornia_tensor::{Tensor1, Tensor2, Tensor3, Tensor4};
use rayon::prelude::*;

use crate::error::ImgprocError;
use crate::image::{ImageSize, Plane};
use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    // follow OpenCV: check for determinant == 0
    // https://github.com/opencv/opencv/blob/4.9.0/modules/imgproc/src/imgwarp.cpp#L2765
    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f]
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// Positive angles rotate anti-clockwise in image coordinates (y pointing down).
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use kornia_imgproc::warp::get_rotation_matrix2d;
///
/// let rotation_matrix = get_rotation_matrix2d((0.0, 0.0), 0.0, 1.0);
/// assert_eq!(rotation_matrix, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

/// Batched version of [`get_rotation_matrix2d`].
///
/// # Arguments
///
/// * `center` - The rotation centers with shape (B, 2), last dimension (cx, cy).
/// * `angle` - The rotation angles in degrees with shape (B).
/// * `scale` - The scale factors with shape (B).
///
/// # Returns
///
/// The rotation matrices with shape (B, 2, 3).
///
/// # Errors
///
/// If the center is not (B, 2) or the batch sizes of the arguments differ.
pub fn get_rotation_matrix2d_batch(
    center: &Tensor2<f32>,
    angle: &Tensor1<f32>,
    scale: &Tensor1<f32>,
) -> Result<Tensor3<f32>, ImgprocError> {
    let [batch] = angle.shape;

    if center.shape[1] != 2 {
        return Err(ImgprocError::InvalidMatrixShape {
            expected: vec![batch, 2],
            actual: center.shape.to_vec(),
        });
    }
    if center.shape[0] != batch {
        return Err(ImgprocError::BatchSizeMismatch(batch, center.shape[0]));
    }
    if scale.shape[0] != batch {
        return Err(ImgprocError::BatchSizeMismatch(batch, scale.shape[0]));
    }

    let data = center
        .as_slice()
        .chunks_exact(2)
        .zip(angle.as_slice().iter().zip(scale.as_slice()))
        .flat_map(|(c, (&a, &s))| get_rotation_matrix2d((c[0], c[1]), a, s))
        .collect();

    Ok(Tensor3::from_shape_vec([batch, 2, 3], data)?)
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to a batch of images.
///
/// The matrices map source coordinates to destination coordinates; each
/// destination pixel is filled by inverting the matrix and sampling the
/// source. Destination pixels that map outside the source are set to zero.
///
/// # Arguments
///
/// * `src` - The input images with shape (B, C, H, W).
/// * `m` - The 2x3 affine transformation matrices with shape (B, 2, 3).
/// * `new_size` - The spatial size of the output images.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The output images with shape (B, C, new_height, new_width).
///
/// # Example
///
/// ```
/// use kornia_imgproc::{image::ImageSize, interpolation::InterpolationMode, warp::warp_affine};
/// use kornia_tensor::{Tensor3, Tensor4};
///
/// let src = Tensor4::<f32>::from_shape_val([1, 3, 5, 4], 1.0);
/// let m = Tensor3::<f32>::from_shape_vec([1, 2, 3], vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
/// let new_size = ImageSize { width: 4, height: 5 };
///
/// let dst = warp_affine(&src, &m, new_size, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(dst.shape, [1, 3, 5, 4]);
/// ```
pub fn warp_affine(
    src: &Tensor4<f32>,
    m: &Tensor3<f32>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Tensor4<f32>, ImgprocError> {
    let [batch, channels, rows, cols] = src.shape;

    if m.shape[1] != 2 || m.shape[2] != 3 {
        return Err(ImgprocError::InvalidMatrixShape {
            expected: vec![batch, 2, 3],
            actual: m.shape.to_vec(),
        });
    }
    if m.shape[0] != batch {
        return Err(ImgprocError::BatchSizeMismatch(batch, m.shape[0]));
    }

    let mut dst = Tensor4::<f32>::zeros([batch, channels, new_size.height, new_size.width]);
    if dst.numel() == 0 {
        return Ok(dst);
    }

    // invert affine transform matrices to find corresponding positions in src from dst
    let m_inv = m
        .as_slice()
        .chunks_exact(6)
        .map(|chunk| {
            let mut m = [0.0f32; 6];
            m.copy_from_slice(chunk);
            invert_affine_transform(&m)
        })
        .collect::<Vec<_>>();

    let src_size = ImageSize {
        width: cols,
        height: rows,
    };
    let src_plane_len = rows * cols;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(new_size.width * new_size.height)
        .enumerate()
        .for_each(|(p, dst_plane)| {
            let m_inv = &m_inv[p / channels];
            let src_plane = Plane::new(
                &src_data[p * src_plane_len..(p + 1) * src_plane_len],
                src_size,
            );
            dst_plane
                .chunks_exact_mut(new_size.width)
                .enumerate()
                .for_each(|(y, dst_row)| {
                    dst_row.iter_mut().enumerate().for_each(|(x, dst_pixel)| {
                        let (u, v) = transform_point(x as f32, y as f32, m_inv);
                        *dst_pixel = interpolate_pixel(&src_plane, u, v, interpolation);
                    });
                });
        });

    Ok(dst)
}
