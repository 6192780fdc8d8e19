//! Palette definition and nearest-color matching.
//!
//! A [`Palette`] is an ordered, immutable list of opaque target colors.
//! Matching converts the input to Lab and scans for the entry with the
//! smallest CIE76 difference; ties resolve to the earliest entry, so
//! sheet order is part of a palette's meaning.
//!
//! # Example
//!
//! ```
//! use palette_remap::{Palette, Rgba};
//!
//! let palette = Palette::from_hex(&["#1A1A1A", "#E8E0D0", "#B03A2E"]).unwrap();
//!
//! // A washed-out red lands on the brick entry
//! let nearest = palette.nearest_color(Rgba::from_rgb(180, 80, 70));
//! assert_eq!(nearest, Rgba::from_rgb(0xB0, 0x3A, 0x2E));
//! ```

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
