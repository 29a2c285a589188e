//! Tracker bank
//!
//! Owns every damped value the choreographer advances per frame.

use crate::damp::DampedValue;
use scrollscape_core::Result;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TrackerId;
}

/// Registry of damped trackers, stepped by the frame loop
pub struct TrackerBank {
    trackers: SlotMap<TrackerId, DampedValue>,
}

impl TrackerBank {
    pub fn new() -> Self {
        Self {
            trackers: SlotMap::with_key(),
        }
    }

    /// Register a tracker resting on `initial`
    pub fn add(&mut self, initial: f32, rate: f32) -> Result<TrackerId> {
        Ok(self.trackers.insert(DampedValue::new(initial, rate)?))
    }

    pub fn get_mut(&mut self, id: TrackerId) -> Option<&mut DampedValue> {
        self.trackers.get_mut(id)
    }

    /// Current value, or `0.0` for an unknown id
    pub fn value(&self, id: TrackerId) -> f32 {
        self.trackers.get(id).map(DampedValue::value).unwrap_or(0.0)
    }

    /// Set a new target and advance one tracker, returning its value
    pub fn chase(&mut self, id: TrackerId, target: f32, dt: f32) -> f32 {
        match self.trackers.get_mut(id) {
            Some(tracker) => {
                tracker.set_target(target);
                tracker.step(dt)
            }
            None => {
                tracing::warn!(?id, "chase on unknown tracker");
                0.0
            }
        }
    }

    /// Check if any tracker is still further than `epsilon` from its target
    pub fn has_active(&self, epsilon: f32) -> bool {
        self.trackers.iter().any(|(_, t)| !t.is_settled(epsilon))
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}

impl Default for TrackerBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_chase() {
        let mut bank = TrackerBank::new();
        let x = bank.add(15.0, 2.0).unwrap();
        let z = bank.add(0.0, 2.0).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(!bank.has_active(1e-3));

        let moved = bank.chase(x, -15.0, 0.016);
        assert!(moved < 15.0 && moved > -15.0);
        assert_eq!(bank.value(z), 0.0);
        assert!(bank.has_active(1e-3));
    }

    #[test]
    fn test_chase_settles() {
        let mut bank = TrackerBank::new();
        let a = bank.add(0.0, 2.0).unwrap();
        let b = bank.add(1.0, 6.0).unwrap();

        for _ in 0..1000 {
            bank.chase(a, 1.0, 0.016);
            bank.chase(b, 0.8, 0.016);
        }
        assert!(!bank.has_active(1e-4));
        assert!((bank.value(a) - 1.0).abs() < 1e-4);
        assert!((bank.value(b) - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_bad_rate() {
        let mut bank = TrackerBank::new();
        assert!(bank.add(0.0, 0.0).is_err());
        assert!(bank.is_empty());
    }

    #[test]
    fn test_unknown_tracker() {
        let mut other = TrackerBank::new();
        let foreign = other.add(4.0, 2.0).unwrap();
        other.add(5.0, 2.0).unwrap();

        let bank = TrackerBank::new();
        assert_eq!(bank.value(foreign), 0.0);
    }
}
