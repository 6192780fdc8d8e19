//! The recoloring pipeline core.
//!
//! This module provides the [`Remapper`] struct, which applies slider
//! adjustments to colors and snaps the result onto a target palette.

use crate::color::{Hsb, Rgba};
use crate::image::TextureImage;
use crate::palette::Palette;
use crate::remap::Adjustments;

/// Applies adjustments and palette matching to colors and images.
///
/// A `Remapper` borrows its target palette and carries the slider
/// settings by value. Per-color work happens in two stages:
///
/// 1. **Adjust**: rotate hue, scale saturation, and stretch brightness
///    around the midpoint, all in HSB space.
/// 2. **Match**: replace the adjusted color with the perceptually
///    nearest palette entry (CIE76 distance in Lab space).
///
/// Transparency is handled at the image level: fully transparent pixels
/// skip both stages and keep their channel bytes untouched, every other
/// pixel is matched opaque and gets its original alpha reattached.
///
/// # Example
///
/// ```
/// use palette_remap::{Adjustments, Palette, Remapper, Rgba, TextureImage};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let adjustments = Adjustments::new();
/// let remapper = Remapper::new(&palette, adjustments);
///
/// let image = TextureImage::filled(4, 4, Rgba::from_rgb(200, 200, 200));
/// let result = remapper.process(&image);
/// assert_eq!(result.pixel(0, 0), Rgba::from_rgb(255, 255, 255));
/// ```
#[derive(Debug, Clone)]
pub struct Remapper<'a> {
    palette: &'a Palette,
    adjustments: Adjustments,
}

impl<'a> Remapper<'a> {
    /// Create a remapper for the given palette and slider settings.
    #[inline]
    pub fn new(palette: &'a Palette, adjustments: Adjustments) -> Self {
        Self {
            palette,
            adjustments,
        }
    }

    /// The target palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        self.palette
    }

    /// The slider settings.
    #[inline]
    pub fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    /// Apply the slider adjustments to a single color.
    ///
    /// The input is decomposed into HSB, each slider is applied to its
    /// channel, and the result is reassembled fully opaque:
    ///
    /// - hue rotates and wraps around the color wheel,
    /// - saturation scales and clamps to `[0, 1]`,
    /// - brightness stretches around the 0.5 midpoint and clamps.
    ///
    /// With all sliders at zero this is an exact identity on the RGB
    /// bytes (alpha aside); the HSB round trip does not drift.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Adjustments, Palette, Remapper, Rgba};
    ///
    /// let palette = Palette::from_hex(&["#000000"]).unwrap();
    /// let remapper = Remapper::new(&palette, Adjustments::new().saturation(-100));
    ///
    /// // Draining saturation collapses to the brightness gray
    /// let gray = remapper.adjust(Rgba::from_rgb(200, 100, 50));
    /// assert_eq!(gray, Rgba::from_rgb(200, 200, 200));
    /// ```
    pub fn adjust(&self, color: Rgba) -> Rgba {
        let hsb = Hsb::from(color);

        let mut h = hsb.h + self.adjustments.hue_shift_degrees() / 360.0;
        h %= 1.0;
        if h < 0.0 {
            h += 1.0;
        }
        let s = (hsb.s * self.adjustments.saturation_factor()).clamp(0.0, 1.0);
        let b = ((hsb.b - 0.5) * self.adjustments.contrast_factor() + 0.5).clamp(0.0, 1.0);

        Hsb::new(h, s, b).to_rgba(255)
    }

    /// Adjust a color and snap it to the nearest palette entry.
    ///
    /// The returned color is always a fully opaque palette entry; the
    /// input's alpha plays no part here.
    #[inline]
    pub fn remap(&self, color: Rgba) -> Rgba {
        self.palette.nearest_color(self.adjust(color))
    }

    /// Remap a whole image.
    ///
    /// Fully transparent pixels pass through byte-identical. Every other
    /// pixel is adjusted, matched against the palette, and written back
    /// with its original alpha.
    pub fn process(&self, image: &TextureImage) -> TextureImage {
        self.process_with(image, |color| self.palette.nearest_color(color))
    }

    /// Remap a whole image with a caller-supplied palette lookup.
    ///
    /// `lookup` receives the adjusted color of each visible pixel and
    /// returns the output color for it; fully transparent pixels never
    /// reach it. This is the seam for memoizing lookups across pixels
    /// and images: a caller can wrap `lookup` around a shared cache and
    /// fall back to [`Palette::nearest_color`] on a miss.
    pub fn process_with<F>(&self, image: &TextureImage, mut lookup: F) -> TextureImage
    where
        F: FnMut(Rgba) -> Rgba,
    {
        let mut pixels = Vec::with_capacity(image.pixels().len());

        for &pixel in image.pixels() {
            if pixel.is_transparent() {
                // Invisible pixels keep their channel bytes exactly
                pixels.push(pixel);
            } else {
                let matched = lookup(self.adjust(pixel));
                pixels.push(matched.with_alpha(pixel.a));
            }
        }

        TextureImage::from_pixels(image.width(), image.height(), pixels)
    }
}
