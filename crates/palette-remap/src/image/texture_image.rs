//! In-memory RGBA pixel buffer.

use crate::color::Rgba;

/// A decoded texture as a row-major RGBA pixel buffer.
///
/// `TextureImage` is the unit the remapping pipeline works on: decoding
/// from and encoding to file formats happens outside this crate, so the
/// core stays free of codec dependencies. Pixels are stored row by row,
/// top to bottom; `(0, 0)` is the top-left corner.
///
/// # Example
///
/// ```
/// use palette_remap::{Rgba, TextureImage};
///
/// let image = TextureImage::filled(2, 2, Rgba::from_rgb(255, 0, 0));
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.pixel(1, 1), Rgba::from_rgb(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl TextureImage {
    /// Create an image from a pixel buffer.
    ///
    /// `pixels` must hold exactly `width * height` entries in row-major
    /// order.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer length must match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Consume the image, returning the pixel buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_dimensions() {
        let image = TextureImage::filled(3, 2, Rgba::from_rgb(1, 2, 3));
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels().len(), 6);
        assert!(image.pixels().iter().all(|&p| p == Rgba::from_rgb(1, 2, 3)));
    }

    #[test]
    fn test_row_major_indexing() {
        let pixels = vec![
            Rgba::from_rgb(0, 0, 0),
            Rgba::from_rgb(1, 0, 0),
            Rgba::from_rgb(2, 0, 0),
            Rgba::from_rgb(0, 1, 0),
            Rgba::from_rgb(1, 1, 0),
            Rgba::from_rgb(2, 1, 0),
        ];
        let image = TextureImage::from_pixels(3, 2, pixels);

        // Second row, third column
        assert_eq!(image.pixel(2, 1), Rgba::from_rgb(2, 1, 0));
        // First row, first column
        assert_eq!(image.pixel(0, 0), Rgba::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_set_pixel() {
        let mut image = TextureImage::filled(2, 2, Rgba::from_rgb(0, 0, 0));
        image.set_pixel(1, 0, Rgba::from_rgb(9, 9, 9));
        assert_eq!(image.pixel(1, 0), Rgba::from_rgb(9, 9, 9));
        assert_eq!(image.pixel(0, 0), Rgba::from_rgb(0, 0, 0));
        assert_eq!(image.pixel(1, 1), Rgba::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_into_pixels_round_trip() {
        let pixels = vec![Rgba::new(5, 6, 7, 8), Rgba::new(9, 10, 11, 12)];
        let image = TextureImage::from_pixels(2, 1, pixels.clone());
        assert_eq!(image.into_pixels(), pixels);
    }
}
