//! Color-level memoization for palette matching.
//!
//! Block textures reuse a small set of distinct colors, so the nearest
//! palette entry for an adjusted color is computed once and shared across
//! all pixels and all images processed against the same palette.

use palette_remap::{Palette, Rgba};
use std::collections::HashMap;
use std::sync::RwLock;

/// Memo table from adjusted color to nearest palette color
///
/// The table knows nothing about which palette produced its entries.
/// Callers own invalidation: [`clear`](Self::clear) must run whenever the
/// effective palette changes, or lookups will serve stale matches.
pub struct ColorCache {
    cache: RwLock<HashMap<Rgba, Rgba>>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the nearest palette color, computing and storing on a miss.
    ///
    /// The computation runs inside the write critical section, so at most
    /// one computation commits per key even under concurrent callers.
    pub fn get_or_compute(&self, adjusted: Rgba, palette: &Palette) -> Rgba {
        if let Some(&hit) = self.cache.read().unwrap().get(&adjusted) {
            return hit;
        }

        let mut cache = self.cache.write().unwrap();
        *cache
            .entry(adjusted)
            .or_insert_with(|| palette.nearest_color(adjusted))
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap();
        let dropped = cache.len();
        cache.clear();
        tracing::debug!(dropped, "Color cache cleared");
    }

    /// Number of memoized colors.
    pub fn len(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw_palette() -> Palette {
        Palette::new(&[Rgba::from_rgb(0, 0, 0), Rgba::from_rgb(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_memoizes_lookups() {
        let cache = ColorCache::new();
        let palette = bw_palette();

        let first = cache.get_or_compute(Rgba::from_rgb(100, 100, 100), &palette);
        assert_eq!(first, Rgba::from_rgb(0, 0, 0));
        assert_eq!(cache.len(), 1);

        let second = cache.get_or_compute(Rgba::from_rgb(100, 100, 100), &palette);
        assert_eq!(second, first);
        assert_eq!(cache.len(), 1, "Repeat lookup must not grow the table");
    }

    #[test]
    fn test_distinct_colors_get_distinct_entries() {
        let cache = ColorCache::new();
        let palette = bw_palette();

        cache.get_or_compute(Rgba::from_rgb(10, 10, 10), &palette);
        cache.get_or_compute(Rgba::from_rgb(250, 250, 250), &palette);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_stale_until_cleared() {
        // The cache does not watch the palette; switching palettes without
        // clearing serves stale entries. That contract is what makes the
        // clear-on-palette-change rule load-bearing.
        let cache = ColorCache::new();
        let gray = Rgba::from_rgb(100, 100, 100);

        let old = cache.get_or_compute(gray, &bw_palette());
        assert_eq!(old, Rgba::from_rgb(0, 0, 0));

        let white_only = Palette::new(&[Rgba::from_rgb(255, 255, 255)]).unwrap();
        let stale = cache.get_or_compute(gray, &white_only);
        assert_eq!(stale, old, "Without a clear, the old match is served");

        cache.clear();
        let fresh = cache.get_or_compute(gray, &white_only);
        assert_eq!(fresh, Rgba::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_clear_empties_table() {
        let cache = ColorCache::new();
        cache.get_or_compute(Rgba::from_rgb(1, 2, 3), &bw_palette());
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        use std::sync::Arc;

        let cache = Arc::new(ColorCache::new());
        let palette = Arc::new(bw_palette());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let palette = Arc::clone(&palette);
                std::thread::spawn(move || {
                    cache.get_or_compute(Rgba::from_rgb(64, 64, 64), &palette)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Rgba::from_rgb(0, 0, 0));
        }
        assert_eq!(cache.len(), 1);
    }
}
