use crate::image::Plane;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `plane` - The input plane.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The value of the closest pixel, or zero when it lies outside the plane.
pub(crate) fn nearest_neighbor_interpolation(plane: &Plane, u: f32, v: f32) -> f32 {
    if !(u.is_finite() && v.is_finite()) {
        return 0.0;
    }
    let iu = u.round() as isize;
    let iv = v.round() as isize;
    plane.get(iu, iv).unwrap_or(0.0)
}
