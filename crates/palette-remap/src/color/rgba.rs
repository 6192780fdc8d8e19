//! 8-bit RGBA color type
//!
//! This is the storage format of texture pixels. It is also the key type for
//! the recoloring caches, so equality and hashing compare all four channels
//! byte for byte.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit RGBA color.
///
/// `Rgba` is the exchange format of the pipeline: texture pixels come in as
/// `Rgba`, palette entries are stored as `Rgba`, and recolored pixels go out
/// as `Rgba`. Derived `Eq` and `Hash` make it usable as a cache key, with two
/// colors equal only when all four channels match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a new color from all four channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB channels.
    ///
    /// # Example
    /// ```
    /// use palette_remap::Rgba;
    /// let red = Rgba::from_rgb(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    ///
    /// # Example
    /// ```
    /// use palette_remap::Rgba;
    /// let pixel = Rgba::from_bytes([10, 20, 30, 40]);
    /// assert_eq!(pixel.b, 30);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The same color with alpha forced to 255.
    ///
    /// Adjusted colors are keyed and matched in their opaque form; the
    /// source pixel's alpha is reattached afterwards.
    #[inline]
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// The same color with the given alpha.
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns true if the color is fully transparent (alpha == 0).
    ///
    /// Fully transparent pixels bypass recoloring entirely; partially
    /// transparent ones (alpha 1..=254) do not.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse an opaque color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed. The parsed color is always fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_remap::Rgba;
    ///
    /// let white: Rgba = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgba::from_rgb(255, 255, 255));
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 255);
    /// assert_eq!(red.g, 0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_rgb(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
