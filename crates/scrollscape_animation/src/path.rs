//! Cyclic path animation
//!
//! Particles travel along the travel axis and wrap around forever. Position is
//! derived from elapsed time modulo the path length, never integrated, so a
//! particle is fully described by its offset seed.

use scrollscape_core::{ensure_finite, ensure_positive, ensure_range, ConfigError, Result};
use serde::Serialize;

/// Opacity profile along a path
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EdgeFade {
    /// Same opacity everywhere on the path
    Constant { opacity: f32 },
    /// Flat at `base_opacity` up to `threshold` from the centre, then a linear
    /// ramp reaching zero at the half extent
    Ramp { threshold: f32, base_opacity: f32 },
}

impl EdgeFade {
    pub const fn new(threshold: f32, base_opacity: f32) -> Self {
        EdgeFade::Ramp {
            threshold,
            base_opacity,
        }
    }

    pub const fn constant(opacity: f32) -> Self {
        EdgeFade::Constant { opacity }
    }

    /// Opacity at `position` on a path spanning `[-half_extent, half_extent]`.
    pub fn opacity(&self, position: f32, half_extent: f32) -> f32 {
        match *self {
            EdgeFade::Constant { opacity } => opacity,
            EdgeFade::Ramp {
                threshold,
                base_opacity,
            } => {
                let distance = position.abs();
                if distance <= threshold {
                    return base_opacity;
                }
                let span = half_extent - threshold;
                if !(span > 0.0) {
                    return 0.0;
                }
                (base_opacity * (1.0 - (distance - threshold) / span)).max(0.0)
            }
        }
    }

    /// Ramps need `0 <= threshold < half_extent` so the ends fade out fully.
    fn validate(&self, half_extent: f32) -> Result<()> {
        match *self {
            EdgeFade::Constant { opacity } => {
                ensure_range("path opacity", opacity, 0.0, 1.0)?;
            }
            EdgeFade::Ramp {
                threshold,
                base_opacity,
            } => {
                if !(threshold >= 0.0 && threshold < half_extent) {
                    return Err(ConfigError::FadeThreshold {
                        threshold,
                        half_extent,
                    });
                }
                ensure_range("path base opacity", base_opacity, 0.0, 1.0)?;
            }
        }
        Ok(())
    }
}

/// Position and opacity of a particle at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PathSample {
    pub position: f32,
    pub opacity: f32,
}

/// Phase of a cyclic path in `[0, total_travel_length)`.
#[inline]
fn phase(elapsed: f32, speed: f32, offset_seed: f32, total_travel_length: f32) -> f32 {
    if !(total_travel_length > 0.0) {
        return 0.0;
    }
    let t = (elapsed * speed + offset_seed).rem_euclid(total_travel_length);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if t >= total_travel_length {
        0.0
    } else {
        t
    }
}

/// Advance a particle along a wrapping path.
///
/// The phase `(elapsed * speed + offset_seed) mod total_travel_length` is
/// recentred by `half_extent`, so positions span
/// `[-half_extent, total_travel_length - half_extent)`. Returns
/// `(position, opacity)`.
pub fn advance(
    elapsed: f32,
    speed: f32,
    offset_seed: f32,
    total_travel_length: f32,
    half_extent: f32,
    edge: EdgeFade,
) -> (f32, f32) {
    let position = phase(elapsed, speed, offset_seed, total_travel_length) - half_extent;
    (position, edge.opacity(position, half_extent))
}

/// Seeds that spread `count` particles evenly over one period:
/// `seed_i = i * total_travel_length / count`.
pub fn evenly_spaced_seeds(count: usize, total_travel_length: f32) -> impl Iterator<Item = f32> {
    let spacing = if count == 0 {
        0.0
    } else {
        total_travel_length / count as f32
    };
    (0..count).map(move |i| i as f32 * spacing)
}

/// A validated wrapping path shared by a family of particles
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CyclicPath {
    speed: f32,
    total_length: f32,
    half_extent: f32,
    edge: EdgeFade,
}

impl CyclicPath {
    pub fn new(speed: f32, total_length: f32, half_extent: f32, edge: EdgeFade) -> Result<Self> {
        let speed = ensure_finite("path speed", speed)?;
        let total_length = ensure_positive("path length", total_length)?;
        let half_extent = ensure_positive("path half extent", half_extent)?;
        edge.validate(half_extent)?;
        Ok(Self {
            speed,
            total_length,
            half_extent,
            edge,
        })
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Seconds for one full lap, `None` for a stationary path
    pub fn period(&self) -> Option<f32> {
        (self.speed != 0.0).then(|| self.total_length / self.speed.abs())
    }

    pub fn sample(&self, elapsed: f32, offset_seed: f32) -> PathSample {
        let (position, opacity) = advance(
            elapsed,
            self.speed,
            offset_seed,
            self.total_length,
            self.half_extent,
            self.edge,
        );
        PathSample { position, opacity }
    }

    /// `count` particles evenly spread along this path
    pub fn particles(&self, count: usize) -> Vec<TravelingParticle> {
        evenly_spaced_seeds(count, self.total_length)
            .map(TravelingParticle::new)
            .collect()
    }
}

/// A particle on a cyclic path; its seed is its whole identity
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TravelingParticle {
    pub offset_seed: f32,
}

impl TravelingParticle {
    pub const fn new(offset_seed: f32) -> Self {
        Self { offset_seed }
    }

    pub fn sample(&self, path: &CyclicPath, elapsed: f32) -> PathSample {
        path.sample(elapsed, self.offset_seed)
    }
}
