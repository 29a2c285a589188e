//! Procedural oscillators
//!
//! Every oscillator is a pure function of elapsed time. Nothing accumulates
//! between frames, so outputs never drift and any instant can be sampled
//! directly.

use crate::fade::fade;
use scrollscape_core::{ensure_finite, ensure_positive, ensure_range, ConfigError, Result, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Sinusoidal breathing of a uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    /// Angular frequency in rad/s
    pub frequency: f32,
    /// Peak deviation from a scale of 1
    pub amplitude: f32,
}

impl Pulse {
    pub const fn new(frequency: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    pub fn scale(&self, elapsed: f32) -> f32 {
        1.0 + (elapsed * self.frequency).sin() * self.amplitude
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("pulse frequency", self.frequency)?;
        ensure_range("pulse amplitude", self.amplitude, 0.0, 1.0)?;
        Ok(())
    }
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new(3.0, 0.02)
    }
}

/// Constant-rate rotation around each axis, in rad/s
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Spin {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn around_y(rate: f32) -> Self {
        Self::new(0.0, rate, 0.0)
    }

    /// Euler angles at `elapsed`, each wrapped into `[0, 2π)`.
    pub fn angles(&self, elapsed: f32) -> Vec3 {
        Vec3::new(
            wrap_angle(elapsed * self.x),
            wrap_angle(elapsed * self.y),
            wrap_angle(elapsed * self.z),
        )
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("spin rate x", self.x)?;
        ensure_finite("spin rate y", self.y)?;
        ensure_finite("spin rate z", self.z)?;
        Ok(())
    }
}

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Radius and opacity of one expanding ring
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RingSample {
    pub radius: f32,
    pub opacity: f32,
}

/// An expanding ring that fades out as it grows, then restarts
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shockwave {
    /// Radius growth in units per second
    pub expansion_speed: f32,
    /// Radius at which the ring restarts
    pub max_radius: f32,
    /// Opacity at radius zero
    pub base_opacity: f32,
}

impl Shockwave {
    pub const fn new(expansion_speed: f32, max_radius: f32, base_opacity: f32) -> Self {
        Self {
            expansion_speed,
            max_radius,
            base_opacity,
        }
    }

    /// Sample the ring with its time shifted by `phase` seconds.
    pub fn sample(&self, elapsed: f32, phase: f32) -> RingSample {
        if !(self.max_radius > 0.0) {
            return RingSample::default();
        }
        let mut radius = ((elapsed + phase) * self.expansion_speed).rem_euclid(self.max_radius);
        if radius >= self.max_radius {
            radius = 0.0;
        }
        RingSample {
            radius,
            opacity: fade(radius, self.max_radius) * self.base_opacity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("shockwave expansion speed", self.expansion_speed)?;
        ensure_positive("shockwave max radius", self.max_radius)?;
        ensure_range("shockwave base opacity", self.base_opacity, 0.0, 1.0)?;
        Ok(())
    }
}

impl Default for Shockwave {
    fn default() -> Self {
        Self::new(1.5, 6.0, 0.4)
    }
}

/// Several copies of one shockwave, staggered in time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShockwaveSet {
    #[serde(flatten)]
    pub wave: Shockwave,
    /// Number of rings
    pub count: usize,
    /// Time offset between consecutive rings, in seconds
    pub phase_step: f32,
}

impl ShockwaveSet {
    pub const fn new(wave: Shockwave, count: usize, phase_step: f32) -> Self {
        Self {
            wave,
            count,
            phase_step,
        }
    }

    pub fn samples(&self, elapsed: f32) -> SmallVec<[RingSample; 4]> {
        (0..self.count)
            .map(|i| self.wave.sample(elapsed, i as f32 * self.phase_step))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        self.wave.validate()?;
        if self.count == 0 {
            return Err(ConfigError::EmptyCount {
                name: "shockwave ring count",
            });
        }
        ensure_finite("shockwave phase step", self.phase_step)?;
        // Rings i and i + k coincide when k steps span whole expansion cycles
        let cycle = self.wave.max_radius;
        for k in 1..self.count {
            let travel = k as f32 * self.phase_step * self.wave.expansion_speed;
            let shift = travel.rem_euclid(cycle);
            if shift < 1e-4 || cycle - shift < 1e-4 {
                return Err(ConfigError::SynchronizedRings {
                    phase_step: self.phase_step,
                });
            }
        }
        Ok(())
    }
}

impl Default for ShockwaveSet {
    fn default() -> Self {
        Self::new(Shockwave::default(), 2, 1.75)
    }
}

/// Bobbing offset and gentle tilt for a floating object
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct HoverSample {
    pub offset_y: f32,
    pub tilt: Vec3,
}

/// Idle hover: a slow vertical bob with a matching wobble
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Hover {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }

    pub fn sample(&self, elapsed: f32) -> HoverSample {
        let phase = elapsed / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();
        HoverSample {
            offset_y: sin / 10.0 * self.float_intensity,
            tilt: Vec3::new(cos / 8.0, sin / 8.0, sin / 20.0) * self.rotation_intensity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("hover speed", self.speed)?;
        ensure_finite("hover rotation intensity", self.rotation_intensity)?;
        ensure_finite("hover float intensity", self.float_intensity)?;
        Ok(())
    }
}

impl Default for Hover {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}
