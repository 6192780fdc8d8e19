//! Test application factory for integration tests.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use blocktint::assets::PaletteAssets;
use blocktint::models::{ArtifactId, TextureId};
use blocktint::services::{
    DirectoryImageSource, DirectorySink, PaletteRegistry, RecolorPipeline, SinkExecutor,
    TextureCache,
};

/// Fully wired recolor stack over temporary directories.
///
/// Source textures, palette sheets and the output pack each live in their
/// own tempdir, so every test starts from a clean filesystem.
pub struct TestApp {
    textures: TempDir,
    palettes: TempDir,
    output: TempDir,
    pub registry: Arc<PaletteRegistry>,
    pub texture_cache: Arc<TextureCache>,
    pub sink: Arc<SinkExecutor>,
    pub pipeline: RecolorPipeline,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Like [`new`](Self::new) but with a small texture-cache ceiling so
    /// overflow behavior is reachable without a hundred fixtures.
    pub fn with_cache_ceiling(max_entries: usize) -> Self {
        Self::build(Some(max_entries))
    }

    fn build(max_entries: Option<usize>) -> Self {
        let textures = tempfile::tempdir().expect("Failed to create textures dir");
        let palettes = tempfile::tempdir().expect("Failed to create palettes dir");
        let output = tempfile::tempdir().expect("Failed to create output dir");

        let registry = Arc::new(PaletteRegistry::new(PaletteAssets::new(Some(
            palettes.path().to_path_buf(),
        ))));
        let sink = Arc::new(SinkExecutor::new(Box::new(DirectorySink::new(
            output.path(),
        ))));
        let texture_cache = Arc::new(match max_entries {
            Some(max) => TextureCache::with_max_entries(Arc::clone(&sink), max),
            None => TextureCache::new(Arc::clone(&sink)),
        });
        let source = Arc::new(DirectoryImageSource::new(textures.path()));
        let pipeline = RecolorPipeline::new(
            Arc::clone(&registry),
            Arc::clone(&texture_cache),
            Arc::clone(&sink),
            source,
        );

        Self {
            textures,
            palettes,
            output,
            registry,
            texture_cache,
            sink,
            pipeline,
        }
    }

    pub fn textures_dir(&self) -> PathBuf {
        self.textures.path().to_path_buf()
    }

    /// Write a source texture PNG and return its id.
    ///
    /// `pixels` are row-major; the height follows from the pixel count.
    pub fn add_texture(&self, id: &str, width: u32, pixels: &[[u8; 4]]) -> TextureId {
        let path = self.textures.path().join(format!("{id}.png"));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        let height = pixels.len() as u32 / width;
        let mut png = image::RgbaImage::new(width, height);
        for (i, rgba) in pixels.iter().enumerate() {
            let i = i as u32;
            png.put_pixel(i % width, i / width, image::Rgba(*rgba));
        }
        png.save(&path).expect("Failed to write texture fixture");
        TextureId::new(id)
    }

    /// Write (or overwrite) a palette sheet and reload the registry.
    pub fn add_palette(&self, name: &str, colors: &[[u8; 4]]) {
        let path = self.palettes.path().join(format!("{name}.png"));
        let mut sheet = image::RgbaImage::new(colors.len() as u32, 1);
        for (x, rgba) in colors.iter().enumerate() {
            sheet.put_pixel(x as u32, 0, image::Rgba(*rgba));
        }
        sheet.save(&path).expect("Failed to write palette sheet");
        self.registry.reload();
    }

    /// Decode a produced artifact, waiting for the sink queue first.
    pub fn read_artifact(&self, id: &ArtifactId) -> image::RgbaImage {
        self.sink.flush();
        image::open(self.output.path().join(id.as_str()))
            .expect("Artifact missing from output pack")
            .to_rgba8()
    }

    /// Whether an artifact file currently exists in the output pack.
    pub fn artifact_exists(&self, id: &ArtifactId) -> bool {
        self.sink.flush();
        self.output.path().join(id.as_str()).exists()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
