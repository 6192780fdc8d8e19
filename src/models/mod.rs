pub mod config;
pub mod layer;
pub mod texture;

pub use config::AppConfig;
pub use layer::{Layer, LayerId, LayerManager, DEFAULT_LAYER_NAME, DEFAULT_PALETTE};
pub use texture::{ArtifactId, TextureId};
