//! Discovery and ordering of source textures.

use crate::models::TextureId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Search results are capped so a one-letter query stays readable.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// The set of source textures under the textures directory.
///
/// Ids are directory-relative paths without the `.png` extension. The
/// listing is ordered so texture families sit together: `stone`,
/// `stone_bricks` and `stone_slab` are neighbors regardless of which
/// subdirectory each file lives in.
pub struct TextureLibrary {
    root: PathBuf,
    textures: Vec<TextureId>,
}

impl TextureLibrary {
    /// Scan the directory tree for `*.png` files.
    ///
    /// An unreadable root yields an empty library with a warning; a
    /// missing textures directory is a setup problem, not a crash.
    pub fn scan(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut textures = Vec::new();
        if let Err(error) = collect(&root, &root, &mut textures) {
            tracing::warn!(root = %root.display(), %error, "Texture scan incomplete");
        }
        textures.sort_by_cached_key(family_key);
        tracing::debug!(count = textures.len(), "Texture library scanned");
        Self { root, textures }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All textures in family order.
    pub fn textures(&self) -> &[TextureId] {
        &self.textures
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn contains(&self, texture: &TextureId) -> bool {
        self.textures.iter().any(|t| t == texture)
    }

    /// Case-insensitive prefix search over texture stems.
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<TextureId> {
        let prefix = prefix.to_lowercase();
        self.textures
            .iter()
            .filter(|t| t.stem().to_lowercase().starts_with(&prefix))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Sort key grouping related textures.
///
/// The family is the stem up to its last underscore, so `grass_block_top`
/// and `grass_block_side` share the family `grass_block`. The full id
/// breaks ties between same-named stems in different directories.
fn family_key(texture: &TextureId) -> (String, String, String) {
    let stem = texture.stem();
    let family = stem.rsplit_once('_').map_or(stem, |(family, _)| family);
    (
        family.to_string(),
        stem.to_string(),
        texture.as_str().to_string(),
    )
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<TextureId>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(root, &path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("png") {
            if let Ok(rel) = path.strip_prefix(root) {
                let id = rel.with_extension("").to_string_lossy().replace('\\', "/");
                out.push(TextureId::new(id));
            }
        }
    }
    Ok(())
}
