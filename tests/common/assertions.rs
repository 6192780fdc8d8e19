//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Compare a decoded artifact against expected row-major RGBA pixels.
pub fn assert_pixels(artifact: &image::RgbaImage, expected: &[[u8; 4]]) {
    let actual: Vec<[u8; 4]> = artifact.pixels().map(|p| p.0).collect();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Artifact has {} pixels, expected {}",
        actual.len(),
        expected.len()
    );
    for (i, (got, want)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(got, want, "Pixel {i} mismatch");
    }
}

/// Assert an image is a single pixel of the given color.
pub fn assert_single_pixel(artifact: &image::RgbaImage, expected: [u8; 4]) {
    assert_pixels(artifact, &[expected]);
}
