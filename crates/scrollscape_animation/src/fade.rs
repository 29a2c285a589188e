//! Distance-based opacity falloff

use scrollscape_core::{ensure_positive, ensure_range, Result};

/// Linear falloff: `1` at distance zero, `0` at `max_distance` and beyond.
///
/// Negative distances clamp to full opacity and non-finite ones to zero, so the
/// result always lies in `[0, 1]`. A non-positive `max_distance` is a
/// configuration error caught by [`Fader::new`]; here it degrades to a hard step
/// instead of producing NaN.
#[inline]
pub fn fade(distance: f32, max_distance: f32) -> f32 {
    if !distance.is_finite() {
        return 0.0;
    }
    if !(max_distance > 0.0) {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// Validated fade settings for a pair of primary/secondary elements
/// (a title and its subtext).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fader {
    max_distance: f32,
    secondary_ratio: f32,
}

impl Fader {
    pub fn new(max_distance: f32, secondary_ratio: f32) -> Result<Self> {
        let max_distance = ensure_positive("fade max distance", max_distance)?;
        let secondary_ratio = ensure_range("secondary fade ratio", secondary_ratio, 0.0, 1.0)?;
        Ok(Self {
            max_distance,
            secondary_ratio,
        })
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn opacity(&self, distance: f32) -> f32 {
        fade(distance, self.max_distance)
    }

    /// Primary and secondary opacity for the same distance.
    pub fn pair(&self, distance: f32) -> (f32, f32) {
        let primary = self.opacity(distance);
        (primary, primary * self.secondary_ratio)
    }
}
