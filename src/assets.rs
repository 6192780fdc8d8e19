//! Palette sheet loading with embedded fallbacks
//!
//! Built-in swatch sheets ship inside the binary; a configured palettes
//! directory adds custom sheets on top:
//!
//! - No directory configured: embedded sheets only (no filesystem access)
//! - Directory configured: filesystem sheets shadow embedded ones by name

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded palette swatch sheets
#[derive(RustEmbed)]
#[folder = "assets/palettes/"]
#[include = "*.png"]
struct EmbeddedPalettes;

/// Palette sheet loader with optional filesystem override
pub struct PaletteAssets {
    /// External palettes directory (from config)
    palettes_dir: Option<PathBuf>,
}

impl PaletteAssets {
    /// Create a new palette sheet loader
    ///
    /// `palettes_dir` should be `Some` only if the user configured one.
    /// If `None`, embedded sheets are used exclusively.
    pub fn new(palettes_dir: Option<PathBuf>) -> Self {
        Self { palettes_dir }
    }

    /// Read a swatch sheet by palette name
    ///
    /// If an external directory is configured and holds `<name>.png`, that
    /// file wins. Otherwise falls back to the embedded sheet.
    pub fn read_sheet(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        let file_name = format!("{name}.png");

        if let Some(ref dir) = self.palettes_dir {
            let full_path = dir.join(&file_name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading swatch sheet from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedPalettes::get(&file_name)
            .map(|f| {
                tracing::trace!(sheet = %file_name, "Loading swatch sheet from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Swatch sheet not found: {file_name}"),
                )
            })
    }

    /// List all available palette names (merged view of embedded + external)
    pub fn sheet_names(&self) -> Vec<String> {
        let mut names: HashSet<String> = EmbeddedPalettes::iter()
            .filter_map(|file| Self::stem_of(&file))
            .collect();

        if let Some(ref dir) = self.palettes_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if let Some(stem) = Self::stem_of(name) {
                            names.insert(stem);
                        }
                    }
                }
            }
        }

        let mut result: Vec<_> = names.into_iter().collect();
        result.sort();
        result
    }

    /// List the embedded palette names (for display)
    pub fn embedded_names() -> Vec<String> {
        let mut result: Vec<_> = EmbeddedPalettes::iter()
            .filter_map(|file| Self::stem_of(&file))
            .collect();
        result.sort();
        result
    }

    fn stem_of(file_name: &str) -> Option<String> {
        file_name
            .strip_suffix(".png")
            .map(|stem| stem.to_string())
    }
}
