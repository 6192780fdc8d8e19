//! Test fixtures and constants.

use blocktint::models::{Layer, LayerId};

/// Colors with known matching behavior against a black/white palette.
pub mod colors {
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];

    /// Gray that matches black (Lab distance 42.4 vs 57.6 to white)
    pub const DARKISH_GRAY: [u8; 4] = [100, 100, 100, 255];

    /// Gray that matches white (Lab distance 22.3 vs 77.7 to black)
    pub const LIGHT_GRAY: [u8; 4] = [192, 192, 192, 255];

    /// Fully transparent pixel whose RGB bytes must survive untouched
    pub const GHOST: [u8; 4] = [210, 190, 170, 0];
}

/// A layer with the given id and palette, zero adjustments.
pub fn layer(id: u64, palette: &str) -> Layer {
    let mut layer = Layer::new(LayerId::new(id), format!("layer-{id}"));
    layer.palette = palette.to_string();
    layer
}
