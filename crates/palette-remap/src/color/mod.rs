//! Color types and conversion utilities
//!
//! This module provides the three color representations the recoloring
//! pipeline works in, each with a distinct job.
//!
//! # Color Spaces
//!
//! - **Rgba**: 8-bit RGBA as stored in texture files. Use for I/O and as
//!   cache keys (equality and hashing are byte-exact).
//! - **Hsb**: Hue/saturation/brightness. Use for the adjustment step, where
//!   the three knobs map directly onto the three components.
//! - **Lab**: CIE Lab. Use for perceptual distance when matching against a
//!   palette.
//!
//! # Example
//!
//! ```
//! use palette_remap::{Hsb, Lab, Rgba};
//!
//! // Load a pixel from a texture (8-bit RGBA)
//! let pixel = Rgba::from_rgb(128, 64, 32);
//!
//! // Adjust it in HSB space
//! let hsb = Hsb::from(pixel);
//! let shifted = Hsb::new(hsb.h, hsb.s * 0.5, hsb.b).to_rgba(pixel.a);
//!
//! // Compare colors perceptually in Lab space
//! let distance = Lab::from(pixel).distance(Lab::from(shifted));
//! assert!(distance > 0.0);
//! ```

mod hsb;
mod lab;
mod rgba;

pub use hsb::Hsb;
pub use lab::Lab;
pub use rgba::Rgba;
