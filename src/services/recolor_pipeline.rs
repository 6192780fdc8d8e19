//! Orchestration of the full recolor path.
//!
//! The pipeline wires the collaborators together: source images come from
//! an [`ImageSource`], palettes from the registry, per-color matches from
//! the memo tables, processed artifacts go to the sink thread, and the
//! texture cache decides whether any of that work happens at all.

use crate::error::AppError;
use crate::models::{ArtifactId, Layer, LayerManager, TextureId};
use crate::services::color_cache::ColorCache;
use crate::services::palette_registry::PaletteRegistry;
use crate::services::sink::SinkExecutor;
use crate::services::texture_cache::{CacheKey, TextureCache};
use palette_remap::{Adjustments, Remapper, Rgba, TextureImage};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Provider of source texture pixels.
pub trait ImageSource: Send + Sync {
    /// Load the texture with the given id, or fail if it does not exist or
    /// cannot be decoded.
    fn load(&self, id: &TextureId) -> Result<TextureImage, AppError>;
}

/// Source that reads `<root>/<texture id>.png`.
pub struct DirectoryImageSource {
    root: PathBuf,
}

impl DirectoryImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageSource for DirectoryImageSource {
    fn load(&self, id: &TextureId) -> Result<TextureImage, AppError> {
        let path = self.root.join(format!("{}.png", id.as_str()));
        if !path.exists() {
            return Err(AppError::TextureNotFound(id.clone()));
        }

        let decoded = image::open(&path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        let pixels = decoded
            .pixels()
            .map(|pixel| {
                let [r, g, b, a] = pixel.0;
                Rgba::new(r, g, b, a)
            })
            .collect();
        Ok(TextureImage::from_pixels(width, height, pixels))
    }
}

/// Outcome of a batch recolor run.
///
/// Failures are per-texture and never abort the batch; a texture that
/// failed simply has no artifact this run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<(TextureId, ArtifactId)>,
    pub failed: Vec<TextureId>,
}

/// Memo tables are scoped by everything that changes a match result.
/// Layers with different palettes or sliders therefore never share (or
/// poison) each other's entries.
type MemoScope = (String, Adjustments);

pub struct RecolorPipeline {
    registry: Arc<PaletteRegistry>,
    texture_cache: Arc<TextureCache>,
    sink: Arc<SinkExecutor>,
    source: Arc<dyn ImageSource>,
    memos: Mutex<HashMap<MemoScope, Arc<ColorCache>>>,
}

impl RecolorPipeline {
    pub fn new(
        registry: Arc<PaletteRegistry>,
        texture_cache: Arc<TextureCache>,
        sink: Arc<SinkExecutor>,
        source: Arc<dyn ImageSource>,
    ) -> Self {
        Self {
            registry,
            texture_cache,
            sink,
            source,
            memos: Mutex::new(HashMap::new()),
        }
    }

    /// Recolor one texture under one layer's settings.
    ///
    /// Served from the texture cache when the same (texture, layer,
    /// sliders, palette) combination was already processed.
    pub fn recolor_texture(
        &self,
        texture: &TextureId,
        layer: &Layer,
    ) -> Result<ArtifactId, AppError> {
        let key = CacheKey::new(texture.clone(), layer);
        self.texture_cache
            .get_or_process(key.clone(), || self.process(texture, layer, &key))
    }

    /// Recolor a batch of textures under one layer, in parallel.
    pub fn recolor_layer(&self, layer: &Layer, textures: &[TextureId]) -> BatchReport {
        let results: Vec<_> = textures
            .par_iter()
            .map(|texture| self.try_one(texture, layer))
            .collect();
        Self::report_from(results)
    }

    /// Recolor a batch of textures, each under the layer that claims it.
    pub fn recolor_all(&self, layers: &LayerManager, textures: &[TextureId]) -> BatchReport {
        let results: Vec<_> = textures
            .par_iter()
            .map(|texture| self.try_one(texture, layers.layer_for_texture(texture)))
            .collect();
        Self::report_from(results)
    }

    /// Drop every color memo table.
    ///
    /// Required after a palette reload: sheet contents may have changed
    /// under an unchanged name, which the memo scope cannot see.
    pub fn clear_color_memos(&self) {
        let mut memos = self.memos.lock().unwrap();
        let dropped = memos.len();
        memos.clear();
        tracing::debug!(dropped, "Color memo tables cleared");
    }

    fn try_one(&self, texture: &TextureId, layer: &Layer) -> Result<(TextureId, ArtifactId), TextureId> {
        match self.recolor_texture(texture, layer) {
            Ok(artifact) => Ok((texture.clone(), artifact)),
            Err(error) => {
                tracing::error!(%texture, %error, "Texture skipped");
                Err(texture.clone())
            }
        }
    }

    fn report_from(results: Vec<Result<(TextureId, ArtifactId), TextureId>>) -> BatchReport {
        let mut report = BatchReport::default();
        for result in results {
            match result {
                Ok(pair) => report.processed.push(pair),
                Err(texture) => report.failed.push(texture),
            }
        }
        report
    }

    fn memo_for(&self, layer: &Layer) -> Arc<ColorCache> {
        let scope = (layer.palette.clone(), layer.adjustments());
        let mut memos = self.memos.lock().unwrap();
        Arc::clone(memos.entry(scope).or_default())
    }

    fn process(
        &self,
        texture: &TextureId,
        layer: &Layer,
        key: &CacheKey,
    ) -> Result<ArtifactId, AppError> {
        tracing::debug!(%texture, layer = %layer.id, "Processing texture");
        let source = self.source.load(texture)?;
        let artifact = key.artifact_id();

        let output = match self.registry.get(&layer.palette) {
            Some(palette) => {
                let memo = self.memo_for(layer);
                let remapper = Remapper::new(&palette, layer.adjustments());
                remapper.process_with(&source, |adjusted| {
                    memo.get_or_compute(adjusted, &palette)
                })
            }
            None => {
                // Unknown or empty palette name: recoloring is off for
                // this layer and the texture passes through untouched.
                tracing::debug!(%texture, palette = %layer.palette, "No palette, passing through");
                source
            }
        };

        self.sink.register(artifact.clone(), output);
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PaletteAssets;
    use crate::models::LayerId;
    use crate::services::sink::DirectorySink;
    use std::collections::HashMap;
    use std::path::Path;

    struct MapSource {
        images: HashMap<TextureId, TextureImage>,
    }

    impl ImageSource for MapSource {
        fn load(&self, id: &TextureId) -> Result<TextureImage, AppError> {
            self.images
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::TextureNotFound(id.clone()))
        }
    }

    fn write_sheet(path: &Path, colors: &[[u8; 4]]) {
        let mut sheet = image::RgbaImage::new(colors.len() as u32, 1);
        for (x, rgba) in colors.iter().enumerate() {
            sheet.put_pixel(x as u32, 0, image::Rgba(*rgba));
        }
        sheet.save(path).unwrap();
    }

    fn pipeline_with(
        palettes_dir: &Path,
        output_dir: &Path,
        images: HashMap<TextureId, TextureImage>,
    ) -> RecolorPipeline {
        let registry = Arc::new(PaletteRegistry::new(PaletteAssets::new(Some(
            palettes_dir.to_path_buf(),
        ))));
        let sink = Arc::new(SinkExecutor::new(Box::new(DirectorySink::new(output_dir))));
        let texture_cache = Arc::new(TextureCache::new(Arc::clone(&sink)));
        RecolorPipeline::new(registry, texture_cache, sink, Arc::new(MapSource { images }))
    }

    #[test]
    fn test_directory_source_loads_pixels() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("blocks")).unwrap();
        let mut png = image::RgbaImage::new(2, 1);
        png.put_pixel(0, 0, image::Rgba([1, 2, 3, 255]));
        png.put_pixel(1, 0, image::Rgba([9, 8, 7, 0]));
        png.save(dir.path().join("blocks/stone.png")).unwrap();

        let source = DirectoryImageSource::new(dir.path());
        let loaded = source.load(&TextureId::new("blocks/stone")).unwrap();

        assert_eq!((loaded.width(), loaded.height()), (2, 1));
        assert_eq!(loaded.pixel(0, 0), Rgba::new(1, 2, 3, 255));
        assert_eq!(loaded.pixel(1, 0), Rgba::new(9, 8, 7, 0));
    }

    #[test]
    fn test_directory_source_missing_texture() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryImageSource::new(dir.path());

        let error = source.load(&TextureId::new("nope")).unwrap_err();
        assert_eq!(error.to_string(), "Texture not found: nope");
    }

    #[test]
    fn test_layers_with_different_palettes_do_not_share_memos() {
        let palettes = tempfile::tempdir().unwrap();
        write_sheet(&palettes.path().join("allblack.png"), &[[0, 0, 0, 255]]);
        write_sheet(&palettes.path().join("allwhite.png"), &[[255, 255, 255, 255]]);
        let output = tempfile::tempdir().unwrap();

        let gray = TextureImage::filled(1, 1, Rgba::from_rgb(100, 100, 100));
        let mut images = HashMap::new();
        images.insert(TextureId::new("gray"), gray);
        let pipeline = pipeline_with(palettes.path(), output.path(), images);

        let mut dark = Layer::new(LayerId::new(1), "Dark");
        dark.palette = "allblack".to_string();
        let mut light = Layer::new(LayerId::new(2), "Light");
        light.palette = "allwhite".to_string();

        let texture = TextureId::new("gray");
        let dark_artifact = pipeline.recolor_texture(&texture, &dark).unwrap();
        let light_artifact = pipeline.recolor_texture(&texture, &light).unwrap();
        pipeline.sink.flush();

        let dark_png = image::open(output.path().join(dark_artifact.as_str()))
            .unwrap()
            .to_rgba8();
        let light_png = image::open(output.path().join(light_artifact.as_str()))
            .unwrap()
            .to_rgba8();
        assert_eq!(dark_png.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(
            light_png.get_pixel(0, 0).0,
            [255, 255, 255, 255],
            "Second layer must not inherit the first layer's memoized match"
        );
    }

    #[test]
    fn test_batch_isolates_per_texture_failures() {
        let palettes = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let mut images = HashMap::new();
        images.insert(
            TextureId::new("present"),
            TextureImage::filled(1, 1, Rgba::from_rgb(10, 10, 10)),
        );
        let pipeline = pipeline_with(palettes.path(), output.path(), images);

        let layer = Layer::new(LayerId::new(1), "Default");
        let report = pipeline.recolor_layer(
            &layer,
            &[TextureId::new("present"), TextureId::new("missing")],
        );

        assert_eq!(report.processed.len(), 1);
        assert_eq!(report.failed, vec![TextureId::new("missing")]);
    }
}
