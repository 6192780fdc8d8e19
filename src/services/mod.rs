pub mod color_cache;
pub mod palette_registry;
pub mod recolor_pipeline;
pub mod sink;
pub mod texture_cache;
pub mod texture_library;

pub use color_cache::ColorCache;
pub use palette_registry::PaletteRegistry;
pub use recolor_pipeline::{BatchReport, DirectoryImageSource, ImageSource, RecolorPipeline};
pub use sink::{ArtifactSink, DirectorySink, SinkExecutor};
pub use texture_cache::{CacheKey, TextureCache};
pub use texture_library::{TextureLibrary, DEFAULT_SEARCH_LIMIT};
