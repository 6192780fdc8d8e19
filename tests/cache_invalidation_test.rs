//! Cache identity and invalidation behavior across the full stack.

mod common;

use blocktint::models::LayerId;
use common::{assert_single_pixel, fixtures, fixtures::colors, TestApp};

#[test]
fn test_cached_artifact_served_until_invalidated() {
    let app = TestApp::new();
    app.add_palette("bw", &[colors::BLACK, colors::WHITE]);
    let texture = app.add_texture("stone", 1, &[colors::DARKISH_GRAY]);
    let layer = fixtures::layer(1, "bw");

    let first = app.pipeline.recolor_texture(&texture, &layer).unwrap();
    assert_single_pixel(&app.read_artifact(&first), colors::BLACK);

    // Swap the source pixels on disk. The cache key is unchanged, so the
    // stale artifact keeps serving without touching the new file.
    app.add_texture("stone", 1, &[colors::WHITE]);
    let second = app.pipeline.recolor_texture(&texture, &layer).unwrap();
    assert_eq!(first, second);
    assert_single_pixel(&app.read_artifact(&second), colors::BLACK);

    // Invalidation forces a fresh run over the new pixels.
    app.texture_cache.clear_texture(&texture);
    let third = app.pipeline.recolor_texture(&texture, &layer).unwrap();
    assert_single_pixel(&app.read_artifact(&third), colors::WHITE);
}

#[test]
fn test_slider_change_creates_distinct_artifacts() {
    let app = TestApp::new();
    app.add_palette("bw", &[colors::BLACK, colors::WHITE]);
    let texture = app.add_texture("banner", 1, &[colors::RED]);

    let mut quarter = fixtures::layer(1, "bw");
    quarter.set_sliders(0, 0, 25);
    let mut half = fixtures::layer(1, "bw");
    half.set_sliders(0, 0, 50);

    let a = app.pipeline.recolor_texture(&texture, &quarter).unwrap();
    let b = app.pipeline.recolor_texture(&texture, &half).unwrap();

    assert_ne!(a, b);
    assert!(app.artifact_exists(&a));
    assert!(app.artifact_exists(&b));
    assert_eq!(app.texture_cache.len(), 2);
}

#[test]
fn test_clear_layer_removes_artifacts_from_disk() {
    let app = TestApp::new();
    app.add_palette("bw", &[colors::BLACK, colors::WHITE]);
    let stone = app.add_texture("stone", 1, &[colors::DARKISH_GRAY]);
    let dirt = app.add_texture("dirt", 1, &[colors::LIGHT_GRAY]);

    let base = fixtures::layer(1, "bw");
    let accent = fixtures::layer(2, "bw");

    let base_stone = app.pipeline.recolor_texture(&stone, &base).unwrap();
    let base_dirt = app.pipeline.recolor_texture(&dirt, &base).unwrap();
    let accent_stone = app.pipeline.recolor_texture(&stone, &accent).unwrap();

    app.texture_cache.clear_layer(LayerId::new(1));

    assert!(!app.artifact_exists(&base_stone));
    assert!(!app.artifact_exists(&base_dirt));
    assert!(
        app.artifact_exists(&accent_stone),
        "Other layers' artifacts must survive a layer clear"
    );
}

#[test]
fn test_overflow_wipes_previous_generation() {
    let app = TestApp::with_cache_ceiling(2);
    app.add_palette("bw", &[colors::BLACK, colors::WHITE]);
    let layer = fixtures::layer(1, "bw");

    let mut artifacts = Vec::new();
    for name in ["a", "b", "c"] {
        let texture = app.add_texture(name, 1, &[colors::DARKISH_GRAY]);
        artifacts.push(app.pipeline.recolor_texture(&texture, &layer).unwrap());
    }
    // Three entries sit in the cache; the ceiling check is strictly-exceeds.
    assert_eq!(app.texture_cache.len(), 3);

    let texture = app.add_texture("d", 1, &[colors::DARKISH_GRAY]);
    let survivor = app.pipeline.recolor_texture(&texture, &layer).unwrap();

    for old in &artifacts {
        assert!(
            !app.artifact_exists(old),
            "Overflow must destroy the previous generation"
        );
    }
    assert!(app.artifact_exists(&survivor));
    assert_eq!(app.texture_cache.len(), 1);
}

#[test]
fn test_palette_reload_requires_full_invalidation() {
    let app = TestApp::new();
    app.add_palette("mood", &[colors::BLACK]);
    let texture = app.add_texture("stone", 1, &[colors::DARKISH_GRAY]);
    let layer = fixtures::layer(1, "mood");

    let first = app.pipeline.recolor_texture(&texture, &layer).unwrap();
    assert_single_pixel(&app.read_artifact(&first), colors::BLACK);

    // Same palette name, new sheet contents. The cache key cannot see
    // this, which is why reloads demand clearing both cache levels.
    app.add_palette("mood", &[colors::WHITE]);
    app.pipeline.clear_color_memos();
    app.texture_cache.clear_all();

    let second = app.pipeline.recolor_texture(&texture, &layer).unwrap();
    assert_eq!(first, second, "The artifact id is purely name-derived");
    assert_single_pixel(&app.read_artifact(&second), colors::WHITE);
}
