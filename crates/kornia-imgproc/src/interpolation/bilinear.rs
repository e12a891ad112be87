use crate::image::Plane;

/// Kernel for bilinear interpolation
///
/// Neighbours outside the plane contribute zero.
///
/// # Arguments
///
/// * `plane` - The input plane.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub(crate) fn bilinear_interpolation(plane: &Plane, u: f32, v: f32) -> f32 {
    // no neighbour can be inside the plane, also rejects NaN
    let (rows, cols) = (plane.rows() as f32, plane.cols() as f32);
    if !(u > -1.0 && u < cols && v > -1.0 && v < rows) {
        return 0.0;
    }

    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let (iu0, iv0) = (u0 as isize, v0 as isize);

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let p00 = plane.get(iu0, iv0).unwrap_or(0.0);
    let p01 = plane.get(iu0 + 1, iv0).unwrap_or(0.0);
    let p10 = plane.get(iu0, iv0 + 1).unwrap_or(0.0);
    let p11 = plane.get(iu0 + 1, iv0 + 1).unwrap_or(0.0);

    p00 * w00 + p01 * w01 + p10 * w10 + p11 * w11
}
