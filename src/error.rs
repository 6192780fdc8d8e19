use crate::models::{LayerId, TextureId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Texture not found: {0}")]
    TextureNotFound(TextureId),

    #[error("Unknown layer: {0}")]
    UnknownLayer(LayerId),

    #[error("Cannot delete the last layer")]
    LastLayer,

    #[error("Swatch sheet '{0}' has no opaque pixels")]
    EmptySheet(String),

    #[error("Palette error: {0}")]
    Palette(#[from] palette_remap::PaletteError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
