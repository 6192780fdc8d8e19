//! Adjustment settings and the remapping pipeline.
//!
//! [`Adjustments`] holds the contrast, saturation, and hue sliders;
//! [`Remapper`] applies them and snaps the result onto a palette.
//!
//! # Example
//!
//! ```
//! use palette_remap::{Adjustments, Palette, Remapper, Rgba};
//!
//! let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
//! let remapper = Remapper::new(&palette, Adjustments::new().contrast(50));
//!
//! // Boosted contrast pushes light gray all the way to white
//! assert_eq!(
//!     remapper.remap(Rgba::from_rgb(200, 200, 200)),
//!     Rgba::from_rgb(255, 255, 255)
//! );
//! ```

mod options;
mod remapper;

pub use options::Adjustments;
pub use remapper::Remapper;
