//! Slider-style adjustment settings.
//!
//! This module provides the [`Adjustments`] struct holding the contrast,
//! saturation, and hue slider values applied before palette matching.

/// Contrast, saturation, and hue slider values.
///
/// Each slider is an integer in `[-100, 100]`; setters clamp out-of-range
/// input. The integer representation is deliberate: adjustments take part
/// in cache keys, so they need `Eq` and `Hash`, and two settings that
/// differ at all are treated as different work.
///
/// # Slider semantics
///
/// - Contrast and saturation map to multiplicative factors:
///   `-100` kills the channel (factor 0.0), `0` is neutral (1.0),
///   `+100` doubles it (2.0).
/// - Hue maps to a rotation around the color wheel: `+-100` is a full
///   turn (+-360 degrees), so the extremes land back on the input hue.
///
/// # Example
///
/// ```
/// use palette_remap::Adjustments;
///
/// // Neutral settings
/// let adjustments = Adjustments::new();
/// assert!(adjustments.is_identity());
///
/// // Customize with builder pattern
/// let adjustments = Adjustments::new()
///     .contrast(20)
///     .saturation(-30)
///     .hue(10);
/// assert_eq!(adjustments.contrast_value(), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Adjustments {
    contrast: i32,
    saturation: i32,
    hue: i32,
}

impl Adjustments {
    /// Create neutral adjustments (all sliders at zero).
    ///
    /// This is equivalent to `Adjustments::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contrast slider.
    ///
    /// Out-of-range values clamp to `[-100, 100]`.
    ///
    /// # Arguments
    /// * `value` - Contrast slider position (0 = no change)
    #[inline]
    pub fn contrast(mut self, value: i32) -> Self {
        self.contrast = value.clamp(-100, 100);
        self
    }

    /// Set the saturation slider.
    ///
    /// Out-of-range values clamp to `[-100, 100]`.
    ///
    /// # Arguments
    /// * `value` - Saturation slider position (0 = no change)
    #[inline]
    pub fn saturation(mut self, value: i32) -> Self {
        self.saturation = value.clamp(-100, 100);
        self
    }

    /// Set the hue slider.
    ///
    /// Out-of-range values clamp to `[-100, 100]`.
    ///
    /// # Arguments
    /// * `value` - Hue slider position (0 = no rotation, +-100 = full turn)
    #[inline]
    pub fn hue(mut self, value: i32) -> Self {
        self.hue = value.clamp(-100, 100);
        self
    }

    /// The contrast slider value.
    #[inline]
    pub fn contrast_value(&self) -> i32 {
        self.contrast
    }

    /// The saturation slider value.
    #[inline]
    pub fn saturation_value(&self) -> i32 {
        self.saturation
    }

    /// The hue slider value.
    #[inline]
    pub fn hue_value(&self) -> i32 {
        self.hue
    }

    /// The multiplicative contrast factor for the current slider value.
    ///
    /// Ranges over `[0.0, 2.0]`; slider zero gives exactly 1.0.
    #[inline]
    pub fn contrast_factor(&self) -> f32 {
        (100 + self.contrast) as f32 / 100.0
    }

    /// The multiplicative saturation factor for the current slider value.
    ///
    /// Ranges over `[0.0, 2.0]`; slider zero gives exactly 1.0.
    #[inline]
    pub fn saturation_factor(&self) -> f32 {
        (100 + self.saturation) as f32 / 100.0
    }

    /// The hue rotation in degrees for the current slider value.
    ///
    /// Ranges over `[-360.0, 360.0]`.
    #[inline]
    pub fn hue_shift_degrees(&self) -> f32 {
        self.hue as f32 / 100.0 * 360.0
    }

    /// Returns true if all sliders are at zero.
    ///
    /// Note that a hue slider at `+-100` rotates a full turn and so also
    /// leaves colors unchanged, but it is still a distinct setting here:
    /// callers keying caches on adjustments must see it as different work.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.contrast == 0 && self.saturation == 0 && self.hue == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let adj = Adjustments::default();
        assert_eq!(adj.contrast_value(), 0, "contrast should default to 0");
        assert_eq!(adj.saturation_value(), 0, "saturation should default to 0");
        assert_eq!(adj.hue_value(), 0, "hue should default to 0");
        assert!(adj.is_identity());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(Adjustments::new(), Adjustments::default());
    }

    #[test]
    fn test_builder_contrast() {
        let adj = Adjustments::new().contrast(35);
        assert_eq!(adj.contrast_value(), 35);
        // Other values unchanged
        assert_eq!(adj.saturation_value(), 0);
        assert_eq!(adj.hue_value(), 0);
    }

    #[test]
    fn test_builder_saturation() {
        let adj = Adjustments::new().saturation(-50);
        assert_eq!(adj.saturation_value(), -50);
        // Other values unchanged
        assert_eq!(adj.contrast_value(), 0);
        assert_eq!(adj.hue_value(), 0);
    }

    #[test]
    fn test_builder_hue() {
        let adj = Adjustments::new().hue(25);
        assert_eq!(adj.hue_value(), 25);
        // Other values unchanged
        assert_eq!(adj.contrast_value(), 0);
        assert_eq!(adj.saturation_value(), 0);
    }

    #[test]
    fn test_builder_chaining() {
        let adj = Adjustments::new().contrast(20).saturation(-30).hue(10);
        assert_eq!(adj.contrast_value(), 20);
        assert_eq!(adj.saturation_value(), -30);
        assert_eq!(adj.hue_value(), 10);
        assert!(!adj.is_identity());
    }

    #[test]
    fn test_clamping_above() {
        let adj = Adjustments::new().contrast(250).saturation(101).hue(9999);
        assert_eq!(adj.contrast_value(), 100);
        assert_eq!(adj.saturation_value(), 100);
        assert_eq!(adj.hue_value(), 100);
    }

    #[test]
    fn test_clamping_below() {
        let adj = Adjustments::new().contrast(-250).saturation(-101).hue(i32::MIN);
        assert_eq!(adj.contrast_value(), -100);
        assert_eq!(adj.saturation_value(), -100);
        assert_eq!(adj.hue_value(), -100);
    }

    #[test]
    fn test_contrast_factor() {
        assert!((Adjustments::new().contrast_factor() - 1.0).abs() < f32::EPSILON);
        assert!((Adjustments::new().contrast(50).contrast_factor() - 1.5).abs() < f32::EPSILON);
        assert!((Adjustments::new().contrast(100).contrast_factor() - 2.0).abs() < f32::EPSILON);
        assert!(Adjustments::new().contrast(-100).contrast_factor().abs() < f32::EPSILON);
    }

    #[test]
    fn test_saturation_factor() {
        assert!((Adjustments::new().saturation_factor() - 1.0).abs() < f32::EPSILON);
        assert!(
            (Adjustments::new().saturation(-30).saturation_factor() - 0.7).abs() < f32::EPSILON
        );
        assert!(Adjustments::new().saturation(-100).saturation_factor().abs() < f32::EPSILON);
    }

    #[test]
    fn test_hue_shift_degrees() {
        assert!(Adjustments::new().hue_shift_degrees().abs() < f32::EPSILON);
        assert!((Adjustments::new().hue(50).hue_shift_degrees() - 180.0).abs() < f32::EPSILON);
        assert!((Adjustments::new().hue(25).hue_shift_degrees() - 90.0).abs() < f32::EPSILON);
        assert!((Adjustments::new().hue(-100).hue_shift_degrees() + 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_is_identity_full_hue_turn_is_not_identity() {
        // A full turn produces the same colors but is a distinct setting
        assert!(!Adjustments::new().hue(100).is_identity());
        assert!(!Adjustments::new().hue(-100).is_identity());
    }

    #[test]
    fn test_hashable_as_cache_key_component() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(Adjustments::new());
        seen.insert(Adjustments::new().hue(100));
        seen.insert(Adjustments::new().hue(-100));
        assert_eq!(seen.len(), 3, "Distinct slider settings must hash apart");
    }
}
