/// Image size in pixels
///
/// # Example
///
/// ```
/// use kornia_imgproc::image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

/// A borrowed single-channel plane of a `[B, C, H, W]` tensor.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {
    data: &'a [f32],
    size: ImageSize,
}

impl<'a> Plane<'a> {
    /// Wraps a row-major slice of `size.height * size.width` values.
    ///
    /// PRECONDITION: `data.len() == size.width * size.height`.
    pub fn new(data: &'a [f32], size: ImageSize) -> Self {
        debug_assert_eq!(data.len(), size.width * size.height);
        Self { data, size }
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The value at integer coordinates, or `None` when outside the plane.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> Option<f32> {
        if x < 0 || y < 0 || x as usize >= self.cols() || y as usize >= self.rows() {
            return None;
        }
        self.data.get(y as usize * self.cols() + x as usize).copied()
    }
}
