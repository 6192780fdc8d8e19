use crate::error::AppError;
use crate::models::LayerManager;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application state persisted as JSON
///
/// Holds the layer setup plus the directories the pipeline reads from and
/// writes to. Loading never fails: unreadable or invalid files fall back
/// to defaults with a warning, so a damaged config cannot brick startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Layer definitions, slider state, and the active layer
    #[serde(default)]
    pub layers: LayerManager,

    /// Directory scanned for source textures
    #[serde(default = "default_textures_dir")]
    pub textures_dir: PathBuf,

    /// Directory processed artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Optional directory with custom palette sheets
    #[serde(default)]
    pub palettes_dir: Option<PathBuf>,
}

fn default_textures_dir() -> PathBuf {
    PathBuf::from("textures")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl AppConfig {
    /// Load configuration from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(mut config) => {
                    config.layers.repair();
                    tracing::info!(
                        path = %path.display(),
                        layers = config.layers.layers().len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layers: LayerManager::new(),
            textures_dir: default_textures_dir(),
            output_dir: default_output_dir(),
            palettes_dir: None,
        }
    }
}
