//! Identity cache for processed texture artifacts.
//!
//! A processed texture is identified by everything that went into it:
//! source texture, layer, the three sliders and the palette name. As long
//! as none of those change, the artifact from the first processing run is
//! reused and the recolor work is skipped entirely.

use crate::error::AppError;
use crate::models::{ArtifactId, Layer, LayerId, TextureId};
use crate::services::sink::SinkExecutor;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cache ceiling. Exceeding it drops the whole table rather than evicting
/// piecemeal; recolor runs are cheap to repeat and the table stays simple.
const DEFAULT_MAX_ENTRIES: usize = 100;

/// Everything that determines the pixels of a processed texture.
///
/// Two keys compare equal exactly when processing would produce identical
/// output, so equality doubles as the cache-hit test.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    texture: TextureId,
    layer: LayerId,
    contrast: i32,
    saturation: i32,
    hue: i32,
    palette: String,
}

impl CacheKey {
    pub fn new(texture: TextureId, layer: &Layer) -> Self {
        Self {
            texture,
            layer: layer.id,
            contrast: layer.contrast,
            saturation: layer.saturation,
            hue: layer.hue,
            palette: layer.palette.clone(),
        }
    }

    /// Deterministic artifact id for this key.
    ///
    /// Doubles as the relative output path. Slashes in the texture id are
    /// flattened so every variant of a layer lands in one directory.
    pub fn artifact_id(&self) -> ArtifactId {
        ArtifactId::new(format!(
            "processed/{}/{}_{}_c{}_s{}_h{}.png",
            self.layer,
            self.texture.as_str().replace('/', "_"),
            self.palette,
            self.contrast,
            self.saturation,
            self.hue
        ))
    }
}

/// One cache slot. The slot-level lock serializes callers racing on the
/// same key while leaving other keys free to process in parallel.
type Slot = Arc<Mutex<Option<ArtifactId>>>;

/// Processed-texture cache with clear-all overflow behavior.
///
/// Invalidation destroys the underlying artifacts through the sink, so a
/// dropped entry never leaves an orphaned file behind.
pub struct TextureCache {
    entries: Mutex<HashMap<CacheKey, Slot>>,
    max_entries: usize,
    sink: Arc<SinkExecutor>,
}

impl TextureCache {
    pub fn new(sink: Arc<SinkExecutor>) -> Self {
        Self::with_max_entries(sink, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(sink: Arc<SinkExecutor>, max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries,
            sink,
        }
    }

    /// Return the cached artifact for `key`, or run `compute` to produce it.
    ///
    /// The ceiling is checked before the lookup: once the table strictly
    /// exceeds `max_entries`, every entry is dropped and its artifact
    /// destroyed, then processing proceeds with an empty table.
    ///
    /// A failed `compute` caches nothing; the next caller retries.
    pub fn get_or_process<F>(&self, key: CacheKey, compute: F) -> Result<ArtifactId, AppError>
    where
        F: FnOnce() -> Result<ArtifactId, AppError>,
    {
        let slot = {
            let mut entries = self.entries.lock().unwrap();
            if entries.len() > self.max_entries {
                let dropped = entries.len();
                Self::destroy_drained(&mut entries, &self.sink);
                tracing::debug!(dropped, "Texture cache over ceiling, cleared");
            }
            Arc::clone(entries.entry(key).or_insert_with(Slot::default))
        };

        // Same-key callers queue here; distinct keys do not contend.
        let mut artifact = slot.lock().unwrap();
        if let Some(id) = artifact.as_ref() {
            return Ok(id.clone());
        }
        let id = compute()?;
        *artifact = Some(id.clone());
        Ok(id)
    }

    /// Drop every entry and destroy every finished artifact.
    pub fn clear_all(&self) {
        let mut entries = self.entries.lock().unwrap();
        let dropped = entries.len();
        Self::destroy_drained(&mut entries, &self.sink);
        tracing::debug!(dropped, "Texture cache cleared");
    }

    /// Drop all variants of one texture across every layer.
    pub fn clear_texture(&self, texture: &TextureId) {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|key, slot| {
            if &key.texture == texture {
                if let Some(id) = slot.lock().unwrap().take() {
                    self.sink.destroy(id);
                }
                false
            } else {
                true
            }
        });
        tracing::debug!(
            dropped = before - entries.len(),
            %texture,
            "Texture cache entries invalidated"
        );
    }

    /// Drop every entry produced under one layer.
    pub fn clear_layer(&self, layer: LayerId) {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|key, slot| {
            if key.layer == layer {
                if let Some(id) = slot.lock().unwrap().take() {
                    self.sink.destroy(id);
                }
                false
            } else {
                true
            }
        });
        tracing::debug!(
            dropped = before - entries.len(),
            %layer,
            "Layer cache entries invalidated"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn destroy_drained(entries: &mut HashMap<CacheKey, Slot>, sink: &SinkExecutor) {
        for (_, slot) in entries.drain() {
            // Slots still mid-compute hold None and need no destroy; their
            // artifact id is deterministic and gets overwritten on reuse.
            if let Some(id) = slot.lock().unwrap().take() {
                sink.destroy(id);
            }
        }
    }
}
