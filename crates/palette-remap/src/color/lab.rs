//! CIE Lab color space
//!
//! Lab is used for perceptual distance when matching a pixel against the
//! palette. Euclidean distance in Lab is the CIE76 color difference, which
//! is stable, cheap, and entirely adequate for picking the closest entry
//! out of a small swatch palette.
//!
//! # References
//!
//! CIE 15:2004, Colorimetry. Conversion constants are the commonly
//! published 4-decimal sRGB/D65 values.

use super::rgba::Rgba;

// D65 reference white, 2 degree observer
const WHITE_X: f32 = 95.047;
const WHITE_Y: f32 = 100.0;
const WHITE_Z: f32 = 108.883;

/// A color in CIE Lab space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Euclidean distance between two `Lab` values is the CIE76 color
/// difference. A difference around 2.3 is roughly the just-noticeable
/// threshold; palette matching only ever compares distances against each
/// other, so the absolute scale is informational.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis: roughly -128.0 to 127.0 for in-gamut colors
    pub a: f32,
    /// Blue-yellow axis: roughly -128.0 to 127.0 for in-gamut colors
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared CIE76 distance.
    ///
    /// Use this when only comparing distances against each other (nearest
    /// scans); it skips the square root.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// CIE76 color difference (Euclidean distance in Lab).
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Lab, Rgba};
    ///
    /// let red = Lab::from(Rgba::from_rgb(255, 0, 0));
    /// let green = Lab::from(Rgba::from_rgb(0, 255, 0));
    ///
    /// // Opposing primaries are far apart
    /// assert!(red.distance(green) > 100.0);
    /// // A color is at distance zero from itself
    /// assert_eq!(red.distance(red), 0.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl From<Rgba> for Lab {
    /// Convert from 8-bit RGBA, ignoring alpha.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Lab, Rgba};
    ///
    /// let gray = Lab::from(Rgba::from_rgb(128, 128, 128));
    /// // Neutral gray has near-zero chromatic components
    /// assert!(gray.a.abs() < 0.05);
    /// assert!(gray.b.abs() < 0.05);
    /// ```
    fn from(c: Rgba) -> Self {
        // Step 1: gamma-decompress sRGB bytes to linear RGB
        let r = srgb_to_linear(c.r);
        let g = srgb_to_linear(c.g);
        let b = srgb_to_linear(c.b);

        // Step 2: linear RGB to CIE XYZ (sRGB/D65 matrix), scaled so that
        // the white point has Y = 100
        let x = (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0;
        let y = (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0;
        let z = (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0;

        // Step 3: normalize by the reference white and apply the Lab
        // nonlinearity
        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// IEC 61966-2-1 gamma decompression for one 8-bit channel.
#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// The Lab nonlinearity with the standard linear segment near black.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}
