use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use crate::image::Plane;

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `plane` - The input plane with shape (height, width).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn interpolate_pixel(plane: &Plane, u: f32, v: f32, interpolation: InterpolationMode) -> f32 {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(plane, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(plane, u, v),
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate_pixel, InterpolationMode};
    use crate::image::{ImageSize, Plane};

    fn ramp() -> Vec<f32> {
        // value = 10 * y + x on a 3x3 grid
        (0..3)
            .flat_map(|y| (0..3).map(move |x| (10 * y + x) as f32))
            .collect()
    }

    #[test]
    fn integer_locations_are_exact() {
        let data = ramp();
        let plane = Plane::new(&data, ImageSize { width: 3, height: 3 });
        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            assert_eq!(interpolate_pixel(&plane, 2.0, 1.0, mode), 12.0);
            assert_eq!(interpolate_pixel(&plane, 0.0, 0.0, mode), 0.0);
        }
    }

    #[test]
    fn bilinear_midpoint() {
        let data = ramp();
        let plane = Plane::new(&data, ImageSize { width: 3, height: 3 });
        let v = interpolate_pixel(&plane, 0.5, 0.5, InterpolationMode::Bilinear);
        assert!((v - 5.5).abs() < 1e-6);
    }

    #[test]
    fn nearest_rounds() {
        let data = ramp();
        let plane = Plane::new(&data, ImageSize { width: 3, height: 3 });
        assert_eq!(
            interpolate_pixel(&plane, 1.6, 0.4, InterpolationMode::Nearest),
            2.0
        );
    }

    #[test]
    fn outside_reads_zero() {
        let data = vec![1.0f32; 4];
        let plane = Plane::new(&data, ImageSize { width: 2, height: 2 });
        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            assert_eq!(interpolate_pixel(&plane, -3.0, 0.0, mode), 0.0);
            assert_eq!(interpolate_pixel(&plane, 0.0, 5.0, mode), 0.0);
        }
    }

    #[test]
    fn far_away_and_non_finite_read_zero() {
        let data = vec![1.0f32; 4];
        let plane = Plane::new(&data, ImageSize { width: 2, height: 2 });
        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            assert_eq!(interpolate_pixel(&plane, 1e30, 0.5, mode), 0.0);
            assert_eq!(interpolate_pixel(&plane, -1e30, 0.5, mode), 0.0);
            assert_eq!(interpolate_pixel(&plane, 0.5, 1e30, mode), 0.0);
            assert_eq!(interpolate_pixel(&plane, f32::INFINITY, 0.0, mode), 0.0);
            assert_eq!(interpolate_pixel(&plane, 0.0, f32::NAN, mode), 0.0);
        }
        // the last in-range fraction still blends with the border
        let v = interpolate_pixel(&plane, -0.5, 0.0, InterpolationMode::Bilinear);
        assert!((v - 0.5).abs() < 1e-6);
    }
}
