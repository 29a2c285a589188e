//! Frame-rate independent exponential damping
//!
//! Each call moves a value by `1 - e^(-rate * dt)` of its remaining distance to
//! the target. Two steps of `dt` land exactly where one step of `2 * dt` would,
//! so convergence time does not depend on frame rate.

use scrollscape_core::{ensure_positive, Result};

/// Fraction of the remaining distance covered in one step.
///
/// Zero for non-positive or non-finite rates and deltas.
#[inline]
pub fn step_fraction(smoothing_rate: f32, delta_time: f32) -> f32 {
    if !(delta_time > 0.0 && delta_time.is_finite()) || !(smoothing_rate > 0.0) {
        return 0.0;
    }
    -(-smoothing_rate * delta_time).exp_m1()
}

/// Move `current` toward `target` by an exponential step.
///
/// A zero or negative `delta_time` returns `current` unchanged, so paused
/// frames never step backwards.
#[inline]
pub fn damp(current: f32, target: f32, smoothing_rate: f32, delta_time: f32) -> f32 {
    let fraction = step_fraction(smoothing_rate, delta_time);
    if fraction == 0.0 {
        return current;
    }
    current + (target - current) * fraction
}

/// A scalar that chases a target with exponential damping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedValue {
    value: f32,
    target: f32,
    rate: f32,
}

impl DampedValue {
    /// Create a value at rest on `initial`.
    ///
    /// Fails when `rate` is not a positive finite number.
    pub fn new(initial: f32, rate: f32) -> Result<Self> {
        let rate = ensure_positive("smoothing rate", rate)?;
        Ok(Self {
            value: initial,
            target: initial,
            rate,
        })
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` and rest there.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.value = damp(self.value, self.target, self.rate, dt);
        self.value
    }

    /// Whether the value sits within `epsilon` of its target.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.value).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damp_moves_strictly_between() {
        for &(c, t) in &[(0.0_f32, 10.0_f32), (15.0, -15.0), (-3.0, -2.0)] {
            for &dt in &[0.001_f32, 0.016, 0.1, 0.5] {
                let next = damp(c, t, 2.0, dt);
                let (lo, hi) = if c < t { (c, t) } else { (t, c) };
                assert!(next > lo && next < hi, "damp({c}, {t}, 2, {dt}) = {next}");
            }
        }
    }

    #[test]
    fn test_damp_converges() {
        let mut value = 15.0;
        for _ in 0..2000 {
            value = damp(value, -15.0, 2.0, 0.016);
        }
        assert!((value - (-15.0)).abs() < 1e-4);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        assert_eq!(damp(3.0, 10.0, 2.0, 0.0), 3.0);
        assert_eq!(damp(-7.5, 10.0, 2.5, 0.0), -7.5);
    }

    #[test]
    fn test_negative_delta_is_noop() {
        assert_eq!(damp(3.0, 10.0, 2.0, -0.016), 3.0);
        assert_eq!(damp(3.0, 10.0, 2.0, f32::NAN), 3.0);
    }

    #[test]
    fn test_frame_rate_independent() {
        let one_big = damp(0.0, 10.0, 2.0, 0.032);
        let two_small = damp(damp(0.0, 10.0, 2.0, 0.016), 10.0, 2.0, 0.016);
        assert!((one_big - two_small).abs() < 1e-5);

        let mut at_30fps = 0.0;
        for _ in 0..30 {
            at_30fps = damp(at_30fps, 1.0, 2.0, 1.0 / 30.0);
        }
        let mut at_120fps = 0.0;
        for _ in 0..120 {
            at_120fps = damp(at_120fps, 1.0, 2.0, 1.0 / 120.0);
        }
        assert!((at_30fps - at_120fps).abs() < 1e-4);
    }

    #[test]
    fn test_damped_value_tracks_target() {
        let mut value = DampedValue::new(0.0, 2.0).unwrap();
        assert!(value.is_settled(0.0));

        value.set_target(1.0);
        assert!(!value.is_settled(0.01));

        let max = step_fraction(2.0, 0.016);
        let moved = value.step(0.016);
        assert!((moved - max).abs() < 1e-6);
        assert!(moved < 1.0);

        for _ in 0..1000 {
            value.step(0.016);
        }
        assert!(value.is_settled(1e-4));
    }

    #[test]
    fn test_damped_value_rejects_bad_rate() {
        assert!(DampedValue::new(0.0, 0.0).is_err());
        assert!(DampedValue::new(0.0, -1.0).is_err());
        assert!(DampedValue::new(0.0, f32::NAN).is_err());
    }

    #[test]
    fn test_snap_to() {
        let mut value = DampedValue::new(0.0, 2.0).unwrap();
        value.set_target(5.0);
        value.snap_to(3.0);
        assert_eq!(value.value(), 3.0);
        assert_eq!(value.target(), 3.0);
    }
}
