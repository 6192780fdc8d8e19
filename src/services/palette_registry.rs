//! Named palettes decoded from swatch sheets.
//!
//! A swatch sheet is an ordinary PNG whose fully opaque pixels, read
//! row-major top to bottom, define the palette. Duplicate colors collapse
//! to their first occurrence, so sheets may paint swatches as comfortable
//! blocks rather than single pixels.

use crate::assets::PaletteAssets;
use crate::error::AppError;
use crate::models::{LayerManager, DEFAULT_PALETTE};
use palette_remap::{Palette, Rgba};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Registry of every decodable palette, keyed by sheet name.
///
/// Sheets that fail to decode are skipped with a warning instead of
/// failing the whole registry; one broken file must not take down the
/// built-in palettes.
pub struct PaletteRegistry {
    assets: PaletteAssets,
    palettes: RwLock<HashMap<String, Arc<Palette>>>,
}

impl PaletteRegistry {
    /// Build the registry and decode every available sheet.
    pub fn new(assets: PaletteAssets) -> Self {
        let registry = Self {
            assets,
            palettes: RwLock::new(HashMap::new()),
        };
        registry.reload();
        registry
    }

    /// Re-scan the sheet sources and decode everything from scratch.
    ///
    /// Callers that hold processed output derived from these palettes are
    /// responsible for invalidating it afterwards.
    pub fn reload(&self) {
        let mut loaded = HashMap::new();
        for name in self.assets.sheet_names() {
            let bytes = match self.assets.read_sheet(&name) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::warn!(%name, %error, "Skipping unreadable palette sheet");
                    continue;
                }
            };
            match decode_sheet(&name, &bytes) {
                Ok(palette) => {
                    tracing::debug!(%name, colors = palette.len(), "Palette loaded");
                    loaded.insert(name, Arc::new(palette));
                }
                Err(error) => {
                    tracing::warn!(%name, %error, "Skipping undecodable palette sheet");
                }
            }
        }
        *self.palettes.write().unwrap() = loaded;
    }

    /// Look up a palette by name.
    pub fn get(&self, name: &str) -> Option<Arc<Palette>> {
        self.palettes.read().unwrap().get(name).cloned()
    }

    /// Rewrite layers that reference palettes this registry cannot serve.
    ///
    /// Runs once after configuration load. An empty palette name means
    /// recoloring is disabled for that layer and is left alone; any other
    /// unknown name reverts to the default builtin so a stale reference in
    /// an imported config cannot silently disable recoloring.
    pub fn repair_layer_palettes(&self, layers: &mut LayerManager) {
        for layer in layers.layers_mut() {
            if layer.palette.is_empty() || self.get(&layer.palette).is_some() {
                continue;
            }
            tracing::warn!(
                layer = %layer.id,
                palette = %layer.palette,
                fallback = DEFAULT_PALETTE,
                "Layer references unknown palette"
            );
            layer.palette = DEFAULT_PALETTE.to_string();
        }
    }

    /// `(name, color count)` for every loaded palette, sorted by name.
    pub fn summaries(&self) -> Vec<(String, usize)> {
        let palettes = self.palettes.read().unwrap();
        let mut out: Vec<_> = palettes
            .iter()
            .map(|(name, palette)| (name.clone(), palette.len()))
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.palettes.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode one swatch sheet into a palette.
///
/// Only pixels with alpha 255 count; partial transparency marks a swatch
/// as annotation rather than palette data.
fn decode_sheet(name: &str, bytes: &[u8]) -> Result<Palette, AppError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();

    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for pixel in decoded.pixels() {
        let [r, g, b, a] = pixel.0;
        if a != 255 {
            continue;
        }
        let color = Rgba::from_rgb(r, g, b);
        if seen.insert(color) {
            colors.push(color);
        }
    }

    if colors.is_empty() {
        return Err(AppError::EmptySheet(name.to_string()));
    }
    Ok(Palette::new(&colors)?)
}
