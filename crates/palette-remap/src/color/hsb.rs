//! Hue/saturation/brightness color space
//!
//! HSB is the working space of the adjustment step: the three adjustment
//! knobs (hue rotation, saturation scale, contrast scale) each act on
//! exactly one HSB component, which keeps the transform easy to reason
//! about.
//!
//! The conversion formulas are the classic max/min channel decomposition
//! in single-precision floats. The round trip `Rgba -> Hsb -> Rgba` is
//! byte-exact: the 0.5 rounding margin in [`Hsb::to_rgba`] dwarfs the
//! accumulated float error of the decomposition.

use super::rgba::Rgba;

/// A color in hue/saturation/brightness space.
///
/// # Components
///
/// - `h`: Hue as a fraction of a full turn (0.0 = red, 1/3 = green,
///   2/3 = blue). Values outside 0..1 wrap.
/// - `s`: Saturation (0.0 = gray, 1.0 = fully saturated)
/// - `b`: Brightness (0.0 = black, 1.0 = full intensity)
///
/// Alpha does not exist in this space. [`From<Rgba>`](Self::from) drops it
/// and [`Hsb::to_rgba`] takes the alpha to attach, so the caller decides
/// what happens to transparency across a transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of a full turn (0.0..1.0, wrapping)
    pub h: f32,
    /// Saturation (0.0..=1.0)
    pub s: f32,
    /// Brightness (0.0..=1.0)
    pub b: f32,
}

impl Hsb {
    /// Create a new Hsb color.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::Hsb;
    ///
    /// // A half-bright pure red
    /// let red = Hsb::new(0.0, 1.0, 0.5);
    /// assert_eq!(red.to_rgba(255).r, 128);
    /// ```
    #[inline]
    pub fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    /// Convert back to 8-bit RGBA, attaching the given alpha.
    ///
    /// Hue wraps into one turn before sector selection, so any finite `h`
    /// is valid input. Channels are scaled with a +0.5 rounding offset,
    /// matching the decomposition in [`From<Rgba>`](Self::from) so that an
    /// unmodified round trip reproduces the original bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Hsb, Rgba};
    ///
    /// let pixel = Rgba::new(200, 100, 50, 128);
    /// let round_trip = Hsb::from(pixel).to_rgba(pixel.a);
    /// assert_eq!(round_trip, pixel);
    /// ```
    pub fn to_rgba(self, alpha: u8) -> Rgba {
        if self.s <= 0.0 {
            // Achromatic: all channels carry the brightness
            let v = (self.b * 255.0 + 0.5) as u8;
            return Rgba::new(v, v, v, alpha);
        }

        // Wrap hue into one turn and split it into sector + offset
        let h = (self.h - self.h.floor()) * 6.0;
        let f = h - h.floor();
        let p = self.b * (1.0 - self.s);
        let q = self.b * (1.0 - self.s * f);
        let t = self.b * (1.0 - self.s * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (self.b, t, p),
            1 => (q, self.b, p),
            2 => (p, self.b, t),
            3 => (p, q, self.b),
            4 => (t, p, self.b),
            _ => (self.b, p, q),
        };

        Rgba::new(
            (r * 255.0 + 0.5) as u8,
            (g * 255.0 + 0.5) as u8,
            (b * 255.0 + 0.5) as u8,
            alpha,
        )
    }
}

impl From<Rgba> for Hsb {
    /// Convert from 8-bit RGBA, ignoring alpha.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Hsb, Rgba};
    ///
    /// let green = Hsb::from(Rgba::from_rgb(0, 255, 0));
    /// assert!((green.h - 1.0 / 3.0).abs() < 1e-6);
    /// assert_eq!(green.s, 1.0);
    /// assert_eq!(green.b, 1.0);
    /// ```
    fn from(c: Rgba) -> Self {
        let cmax = c.r.max(c.g).max(c.b);
        let cmin = c.r.min(c.g).min(c.b);

        let brightness = cmax as f32 / 255.0;
        let saturation = if cmax != 0 {
            (cmax - cmin) as f32 / cmax as f32
        } else {
            0.0
        };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let span = (cmax - cmin) as f32;
            let redc = (cmax - c.r) as f32 / span;
            let greenc = (cmax - c.g) as f32 / span;
            let bluec = (cmax - c.b) as f32 / span;

            let mut hue = if c.r == cmax {
                bluec - greenc
            } else if c.g == cmax {
                2.0 + redc - bluec
            } else {
                4.0 + greenc - redc
            };
            hue /= 6.0;
            if hue < 0.0 {
                hue += 1.0;
            }
            hue
        };

        Hsb {
            h: hue,
            s: saturation,
            b: brightness,
        }
    }
}
