//! Pixel buffer type for texture processing.
//!
//! Decoding and encoding live with the caller; this module only defines
//! the in-memory [`TextureImage`] the remap pipeline reads and writes.

mod texture_image;

pub use texture_image::TextureImage;
