use anyhow::Result;
use glam::IVec2;

/// Texel extent the fragment stage assumes on both axes.
///
/// Texture coordinates in `[0, 1)` are scaled by this value to produce the
/// integer lookup coordinate.
pub const LOOKUP_EXTENT: u32 = 256;

const TEXEL_BYTES: u32 = std::mem::size_of::<u32>() as u32;

/// Row-major 2D grid of unsigned-integer texels (mip level 0 only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarImage {
    width: u32,
    height: u32,
    texels: Vec<u32>,
}

impl ScalarImage {
    /// Creates an image from row-major texels.
    ///
    /// Fails on a zero dimension, a width whose row size overflows `u32`, or
    /// when `texels.len() != width * height`.
    pub fn new(width: u32, height: u32, texels: Vec<u32>) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "scalar image has zero size ({width}x{height})");

        anyhow::ensure!(
            width.checked_mul(TEXEL_BYTES).is_some(),
            "scalar image width {width} overflows bytes per row"
        );

        let expected = width as usize * height as usize;
        anyhow::ensure!(
            texels.len() == expected,
            "scalar image {width}x{height} needs {expected} texels, got {}",
            texels.len()
        );

        if width != LOOKUP_EXTENT || height != LOOKUP_EXTENT {
            log::debug!(
                "scalar image is {width}x{height}; fragment lookups assume {LOOKUP_EXTENT}x{LOOKUP_EXTENT}"
            );
        }

        Ok(Self { width, height, texels })
    }

    /// Creates an image by evaluating `f(x, y)` for every texel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Result<Self> {
        let texels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::new(width, height, texels)
    }

    /// Creates an image with every texel set to `value`.
    pub fn filled(width: u32, height: u32, value: u32) -> Result<Self> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn texels(&self) -> &[u32] {
        &self.texels
    }

    /// Texel bytes in row-major order, ready for a queue texture write.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Bytes per row for uploading [`as_bytes`](Self::as_bytes).
    ///
    /// `new` rejects widths for which this would overflow.
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * TEXEL_BYTES
    }

    /// Fetches the texel at `coord`; `None` outside the image.
    pub fn load(&self, coord: IVec2) -> Option<u32> {
        let x = u32::try_from(coord.x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(coord.y).ok().filter(|&y| y < self.height)?;
        self.texels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(ScalarImage::new(0, 4, Vec::new()).is_err());
        assert!(ScalarImage::new(4, 0, Vec::new()).is_err());
    }

    #[test]
    fn rejects_mismatched_texel_count() {
        let err = ScalarImage::new(2, 2, vec![0; 3]).unwrap_err();
        assert!(err.to_string().contains("needs 4 texels, got 3"));
    }

    #[test]
    fn rejects_width_overflowing_row_bytes() {
        let err = ScalarImage::new(1 << 30, 1, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("overflows bytes per row"));

        let widest = u32::MAX / TEXEL_BYTES;
        let err = ScalarImage::new(widest + 1, 1, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("overflows bytes per row"));
    }

    #[test]
    fn load_is_row_major() {
        let img = ScalarImage::from_fn(4, 3, |x, y| y * 10 + x).unwrap();
        assert_eq!(img.load(IVec2::new(0, 0)), Some(0));
        assert_eq!(img.load(IVec2::new(3, 0)), Some(3));
        assert_eq!(img.load(IVec2::new(1, 2)), Some(21));
    }

    #[test]
    fn load_out_of_bounds() {
        let img = ScalarImage::filled(LOOKUP_EXTENT, LOOKUP_EXTENT, 7).unwrap();
        assert_eq!(img.load(IVec2::new(255, 255)), Some(7));
        assert_eq!(img.load(IVec2::new(256, 0)), None);
        assert_eq!(img.load(IVec2::new(0, 256)), None);
        assert_eq!(img.load(IVec2::new(-1, 0)), None);
        assert_eq!(img.load(IVec2::new(0, i32::MIN)), None);
    }

    #[test]
    fn upload_view() {
        let img = ScalarImage::filled(3, 2, 0x0102_0304).unwrap();
        assert_eq!(img.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(img.bytes_per_row(), 12);
        assert_eq!(img.texels().len(), 6);
    }
}
