//! Palette struct with precomputed Lab entries and nearest-color matching.
//!
//! This module provides the core `Palette` type: an ordered, immutable list
//! of opaque target colors with the machinery to find the perceptually
//! nearest entry for any input color.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Lab, Rgba};

/// An ordered set of opaque target colors.
///
/// A palette is built once and never changes. Entry order is significant:
/// when two entries are equally close to an input color, the earlier one
/// wins. Duplicate entries are allowed for the same reason; a swatch sheet
/// that lists a color twice keeps its first position.
///
/// Alpha is not part of a palette. Entries are normalized to fully opaque
/// at construction, and matching ignores the input color's alpha entirely;
/// the caller reattaches transparency after matching.
///
/// # Precomputation
///
/// The Lab representation of every entry is computed once at construction,
/// so a nearest-color lookup is one input conversion plus a linear scan.
///
/// # Example
///
/// ```
/// use palette_remap::{Palette, Rgba};
///
/// let palette = Palette::new(&[
///     Rgba::from_rgb(255, 0, 0),
///     Rgba::from_rgb(0, 0, 0),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest_color(Rgba::from_rgb(250, 10, 5)), Rgba::from_rgb(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    // Entries in sheet order, normalized to alpha = 255
    colors: Vec<Rgba>,
    // Precomputed Lab representation per entry
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a new palette from a slice of colors.
    ///
    /// Entries keep their order and are normalized to fully opaque.
    /// Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty. An
    /// empty palette has no meaningful nearest entry; "no palette at all"
    /// is a state for the caller to represent, not this type.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Palette, PaletteError, Rgba};
    ///
    /// let palette = Palette::new(&[Rgba::from_rgb(16, 16, 16)]).unwrap();
    /// assert_eq!(palette.len(), 1);
    ///
    /// assert!(matches!(Palette::new(&[]), Err(PaletteError::EmptyPalette)));
    /// ```
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        // Entries never change after construction, so the Lab form of each
        // is computed once here and the distance scan never converts again.
        let colors: Vec<Rgba> = colors.iter().map(|c| c.opaque()).collect();
        let lab: Vec<Lab> = colors.iter().map(|&c| Lab::from(c)).collect();

        Ok(Self { colors, lab })
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or [`PaletteError::EmptyPalette`] for an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#C83232"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed: Vec<Rgba> = colors
            .iter()
            .map(|s| Rgba::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: This always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        // Always false - validated at construction
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All entries in sheet order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Get the Lab representation of the entry at the given index.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }

    /// Find the entry nearest to the given color.
    ///
    /// Distance is the CIE76 color difference; the input's alpha is
    /// ignored. Returns `(index, distance)`. Ties go to the earlier entry:
    /// the scan only replaces the running best on a strictly smaller
    /// distance.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_remap::{Palette, Rgba};
    ///
    /// let palette = Palette::new(&[
    ///     Rgba::from_rgb(0, 0, 0),
    ///     Rgba::from_rgb(255, 255, 255),
    /// ])
    /// .unwrap();
    ///
    /// let (idx, dist) = palette.find_nearest(Rgba::from_rgb(0, 0, 0));
    /// assert_eq!(idx, 0);
    /// assert!(dist < 1e-4);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Rgba) -> (usize, f32) {
        let target = Lab::from(color);

        // Linear scan - optimal for swatch-sheet palettes (8-64 colors typical)
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, &entry) in self.lab.iter().enumerate() {
            let dist = target.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist.sqrt())
    }

    /// The palette color nearest to the given color.
    ///
    /// Convenience wrapper over [`find_nearest`](Self::find_nearest) that
    /// returns the entry itself. The result is always fully opaque.
    #[inline]
    pub fn nearest_color(&self, color: Rgba) -> Rgba {
        let (idx, _) = self.find_nearest(color);
        self.colors[idx]
    }
}
