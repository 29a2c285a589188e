//! Per-frame inputs and the shared world transform

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Normalized scroll progress through the document.
///
/// `0.0` is the top of the page, `1.0` the bottom. Produced by an external
/// scroll tracker once per frame; the choreography core only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub offset: f32,
}

impl ScrollState {
    pub const fn new(offset: f32) -> Self {
        Self { offset }
    }

    /// Resolve an optional collaborator value into a usable scroll state.
    ///
    /// A missing source or a non-finite offset becomes offset `0.0`. Offsets
    /// outside `[0, 1]` pass through untouched; downstream formulas tolerate them.
    pub fn resolve(source: Option<ScrollState>) -> ScrollState {
        match source {
            Some(state) if state.offset.is_finite() => state,
            Some(state) => {
                tracing::warn!(offset = state.offset, "non-finite scroll offset, using 0");
                ScrollState::default()
            }
            None => ScrollState::default(),
        }
    }
}

/// Animation time for one rendered frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Monotonic time since the animation started
    pub elapsed: f32,
    /// Time since the previous frame
    pub delta: f32,
}

impl FrameClock {
    pub const fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Resolve a collaborator clock into usable frame time.
    ///
    /// A non-finite elapsed time holds `last_elapsed`, the previous usable value;
    /// a non-finite delta becomes zero so damping holds still for the frame.
    pub fn resolve(self, last_elapsed: f32) -> FrameClock {
        let elapsed = if self.elapsed.is_finite() {
            self.elapsed
        } else {
            tracing::warn!(
                elapsed = self.elapsed,
                last_elapsed,
                "non-finite elapsed time, holding last"
            );
            last_elapsed
        };
        let delta = if self.delta.is_finite() {
            self.delta
        } else {
            tracing::warn!(delta = self.delta, "non-finite frame delta, using 0");
            0.0
        };
        FrameClock { elapsed, delta }
    }
}

/// The single transform applied to the whole stage group.
///
/// Owned by the scene choreographer, rewritten once per frame and read by every
/// stage object in the same frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldTransform {
    pub position_x: f32,
    pub position_z: f32,
    pub scale: f32,
}

impl WorldTransform {
    pub const IDENTITY: WorldTransform = WorldTransform {
        position_x: 0.0,
        position_z: 0.0,
        scale: 1.0,
    };

    pub const fn new(position_x: f32, position_z: f32, scale: f32) -> Self {
        Self {
            position_x,
            position_z,
            scale,
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.position_x, 0.0, self.position_z)
    }

    /// Map a local (authoring) position into world space.
    pub fn apply(&self, local: Vec3) -> Vec3 {
        local * self.scale + self.translation()
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_scroll_defaults_to_top() {
        assert_eq!(ScrollState::resolve(None), ScrollState::new(0.0));
    }

    #[test]
    fn test_resolve_non_finite_scroll() {
        assert_eq!(ScrollState::resolve(Some(ScrollState::new(f32::NAN))).offset, 0.0);
        assert_eq!(
            ScrollState::resolve(Some(ScrollState::new(f32::INFINITY))).offset,
            0.0
        );
    }

    #[test]
    fn test_resolve_keeps_out_of_range_offsets() {
        assert_eq!(ScrollState::resolve(Some(ScrollState::new(1.4))).offset, 1.4);
        assert_eq!(ScrollState::resolve(Some(ScrollState::new(-0.2))).offset, -0.2);
    }

    #[test]
    fn test_resolve_clock_holds_last_elapsed() {
        let clock = FrameClock::new(f32::NAN, 0.016).resolve(2.5);
        assert_eq!(clock, FrameClock::new(2.5, 0.016));

        let clock = FrameClock::new(f32::INFINITY, f32::NAN).resolve(1.0);
        assert_eq!(clock, FrameClock::new(1.0, 0.0));

        let good = FrameClock::new(3.0, 0.016);
        assert_eq!(good.resolve(2.5), good);
    }

    #[test]
    fn test_world_transform_apply() {
        let world = WorldTransform::new(9.0, -1.0, 0.6);
        let p = world.apply(Vec3::new(-15.0, -3.5, 0.0));
        assert!((p.x - 0.0).abs() < 1e-5);
        assert!((p.y - (-2.1)).abs() < 1e-5);
        assert!((p.z - (-1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_identity_is_noop() {
        let local = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(WorldTransform::IDENTITY.apply(local), local);
    }

    #[test]
    fn test_transform_serializes() {
        let json = serde_json::to_string(&WorldTransform::new(1.0, 2.0, 0.5)).unwrap();
        assert_eq!(json, r#"{"position_x":1.0,"position_z":2.0,"scale":0.5}"#);
    }
}
