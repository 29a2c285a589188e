//! Frame timer for the render loop.
//!
//! Produces a [`FrameClock`] per frame, either from wall-clock time or from a
//! fixed step (headless simulation, tests). The timer can be paused, resumed
//! and played at different speeds.

use crate::frame::FrameClock;
use std::time::Instant;

/// A controllable animation time source.
///
/// While paused, every produced [`FrameClock`] carries a zero delta, so damped
/// values hold still and time-derived oscillators freeze in place.
#[derive(Debug)]
pub struct FrameTimer {
    /// Animation time in seconds.
    elapsed: f64,
    /// Whether the timer is running.
    running: bool,
    /// Playback speed multiplier (1.0 = normal, 2.0 = 2x speed).
    speed: f64,
    /// Real-time instant of the last wall-clock tick.
    last_update: Option<Instant>,
    /// Number of frames produced so far.
    frames: u64,
}

impl FrameTimer {
    /// Create a running timer at time zero.
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            running: true,
            speed: 1.0,
            last_update: None,
            frames: 0,
        }
    }

    /// Current animation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames produced since creation or the last reset.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the playback speed, clamped to `[0.1, 10.0]`.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.1, 10.0);
    }

    pub fn play(&mut self) {
        if !self.running {
            self.running = true;
            self.last_update = None;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.last_update = None;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Produce the next frame from wall-clock time.
    ///
    /// The first tick after creation, reset or resume has a zero delta.
    pub fn tick(&mut self) -> FrameClock {
        let now = Instant::now();
        let real_delta = match self.last_update {
            Some(last) if self.running => now.duration_since(last).as_secs_f64(),
            _ => 0.0,
        };
        self.last_update = if self.running { Some(now) } else { None };
        self.step(real_delta)
    }

    /// Produce the next frame after a fixed step of `dt` seconds.
    ///
    /// Negative or non-finite steps count as zero.
    pub fn advance(&mut self, dt: f64) -> FrameClock {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.step(dt)
    }

    /// Return to time zero without changing the running state or speed.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frames = 0;
        self.last_update = None;
    }

    fn step(&mut self, real_delta: f64) -> FrameClock {
        let delta = if self.running {
            real_delta * self.speed
        } else {
            0.0
        };
        self.elapsed += delta;
        self.frames += 1;
        FrameClock::new(self.elapsed as f32, delta as f32)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_creation() {
        let timer = FrameTimer::new();
        assert!(timer.is_running());
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.frame_count(), 0);
        assert_eq!(timer.speed(), 1.0);
    }

    #[test]
    fn test_fixed_step_advance() {
        let mut timer = FrameTimer::new();
        let first = timer.advance(0.5);
        assert_eq!(first, FrameClock::new(0.5, 0.5));

        let second = timer.advance(0.25);
        assert_eq!(second, FrameClock::new(0.75, 0.25));
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_negative_step_is_zero() {
        let mut timer = FrameTimer::new();
        timer.advance(1.0);
        let clock = timer.advance(-0.5);
        assert_eq!(clock.delta, 0.0);
        assert_eq!(clock.elapsed, 1.0);

        let clock = timer.advance(f64::NAN);
        assert_eq!(clock.delta, 0.0);
    }

    #[test]
    fn test_paused_timer_freezes() {
        let mut timer = FrameTimer::new();
        timer.advance(1.0);
        timer.pause();

        let clock = timer.advance(0.5);
        assert_eq!(clock.delta, 0.0);
        assert_eq!(clock.elapsed, 1.0);

        let clock = timer.tick();
        assert_eq!(clock.delta, 0.0);
    }

    #[test]
    fn test_speed() {
        let mut timer = FrameTimer::new();
        timer.set_speed(2.0);
        let clock = timer.advance(0.5);
        assert_eq!(clock.delta, 1.0);

        timer.set_speed(100.0);
        assert_eq!(timer.speed(), 10.0);

        timer.set_speed(0.01);
        assert_eq!(timer.speed(), 0.1);
    }

    #[test]
    fn test_first_tick_has_zero_delta() {
        let mut timer = FrameTimer::new();
        let clock = timer.tick();
        assert_eq!(clock.delta, 0.0);
        assert_eq!(clock.elapsed, 0.0);
    }

    #[test]
    fn test_play_pause_toggle() {
        let mut timer = FrameTimer::new();
        timer.toggle();
        assert!(!timer.is_running());
        timer.toggle();
        assert!(timer.is_running());
    }

    #[test]
    fn test_reset() {
        let mut timer = FrameTimer::new();
        timer.advance(3.0);
        timer.reset();
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.frame_count(), 0);
    }
}
