//! palette-remap: Palette-constrained recoloring for block textures
//!
//! This library provides slider-style color adjustment and perceptual
//! palette matching for low-resolution game textures, where every output
//! pixel must be an exact entry of a small target palette.
//!
//! # Quick Start
//!
//! The [`Remapper`] is the primary entry point:
//!
//! ```
//! use palette_remap::{Adjustments, Palette, Remapper, Rgba, TextureImage};
//!
//! let palette = Palette::from_hex(&["#1A1A1A", "#E8E0D0", "#B03A2E"]).unwrap();
//! let adjustments = Adjustments::new().saturation(-20).contrast(10);
//!
//! let remapper = Remapper::new(&palette, adjustments);
//! let image = TextureImage::filled(16, 16, Rgba::from_rgb(180, 80, 70));
//! let result = remapper.process(&image);
//!
//! assert_eq!(result.width(), 16);
//! assert_eq!(result.height(), 16);
//! ```
//!
//! # Per-Color API
//!
//! For single colors, [`Remapper::adjust()`] and [`Remapper::remap()`]
//! expose the two pipeline stages directly:
//!
//! ```
//! use palette_remap::{Adjustments, Palette, Remapper, Rgba};
//!
//! let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
//! let remapper = Remapper::new(&palette, Adjustments::new());
//!
//! // Dark gray adjusts to itself (neutral sliders) and matches black
//! assert_eq!(remapper.remap(Rgba::from_rgb(64, 64, 64)), Rgba::from_rgb(0, 0, 0));
//! ```
//!
//! # Color Spaces
//!
//! The library enforces type-safe color handling:
//!
//! - [`Rgba`]: 8-bit channels for input/output and byte-exact caching
//! - [`Hsb`]: Hue/saturation/brightness for the slider adjustments
//! - [`Lab`]: CIE Lab for perceptual palette matching
//!
//! # Color Science
//!
//! This section explains the color space choices and the distance metric.
//! The details matter for compatibility: recolored textures are cached
//! and compared byte-for-byte across sessions, so every formula below is
//! pinned, including its rounding behavior.
//!
//! ## Three Color Spaces, Three Purposes
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **RGBA** | 8-bit channels, hashable | Image I/O, palette entries, memo cache keys |
//! | **HSB** | Separates hue, colorfulness, lightness | Slider adjustments via [`Remapper::adjust()`] |
//! | **CIE Lab** | Perceptually near-uniform distances | Palette matching via [`Palette::find_nearest()`] |
//!
//! **RGBA** is the exchange format: texture files, palette swatch sheets,
//! and the color memo cache all speak 8-bit RGBA. Matching results are
//! palette entries verbatim, so output bytes are stable.
//!
//! **HSB** is the classic hue/saturation/brightness cylinder. It is not
//! perceptually uniform, but it is what slider semantics are defined in:
//! artists expect "saturation -100" to collapse a texture to grays and
//! "hue +50" to walk half the color wheel, independent of how uniform
//! those steps look. The conversion is byte-exact on round trip, which
//! keeps the all-zero adjustment a true identity.
//!
//! **CIE Lab** (D65, 2 degree observer) is where "nearest" is decided.
//! Euclidean distance in Lab approximates perceived color difference far
//! better than distance in RGB, which badly over-weights dark blues and
//! under-weights greens.
//!
//! ## Pipeline Overview
//!
//! ```text
//! RGBA input               (decoded texture)
//!     |
//!     +-- alpha == 0 ?  -- yes --> output unchanged bytes
//!     |
//!     v
//! Hsb                      (decompose visible pixel)
//!     |
//!     v
//! [Adjust]                 (rotate hue, scale saturation,
//!     |                     stretch brightness around 0.5)
//!     v
//! RGBA (opaque)            (reassemble adjusted color)
//!     |
//!     v
//! Lab                      (perceptual coordinates)
//!     |
//!     v
//! find_nearest()           (CIE76 scan, first minimum wins)
//!     |
//!     v
//! palette entry + alpha    (original alpha reattached)
//! ```
//!
//! ## Distance Metric: CIE76
//!
//! Matching uses plain Euclidean distance in Lab, the CIE76 difference:
//!
//! ```text
//! dE = sqrt((L1 - L2)^2 + (a1 - a2)^2 + (b1 - b2)^2)
//! ```
//!
//! Later formulas (CIE94, CIEDE2000) correct CIE76's exaggeration of
//! saturated color differences, at several times the arithmetic cost.
//! For snapping pixels onto swatch palettes of 8 to 64 well-separated
//! entries, the corrections almost never change which entry wins, and
//! CIE76 keeps the per-pixel cost to a handful of multiplies after the
//! Lab conversion. Ties go to the earlier palette entry, so sheet order
//! is part of a palette's meaning and duplicate entries are harmless.
//!
//! ## Why Adjustments Happen in HSB
//!
//! Contrast, saturation, and hue sliders are defined by what texture
//! artists expect from them, not by color science: saturation scales the
//! HSB saturation channel, contrast stretches HSB brightness around the
//! 0.5 midpoint, hue rotates around the wheel and wraps. Running the
//! sliders in Lab would be more uniform but would change the results
//! artists have already tuned palettes against. The HSB round trip is
//! byte-exact, so neutral sliders reproduce input textures bit-for-bit
//! and a full-turn hue rotation lands exactly back on the input.

pub mod color;
pub mod image;
pub mod palette;
pub mod remap;


pub use color::{Hsb, Lab, Rgba};
pub use image::TextureImage;
pub use palette::{Palette, PaletteError, ParseColorError};
pub use remap::{Adjustments, Remapper};
