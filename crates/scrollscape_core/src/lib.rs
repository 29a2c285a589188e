//! Scrollscape Core
//!
//! Foundational types shared by the choreography crates:
//!
//! - **Frame inputs**: [`ScrollState`] and [`FrameClock`], supplied once per frame
//!   by the scroll tracker and the render loop
//! - **World transform**: the single shared [`WorldTransform`] applied to every
//!   stage object
//! - **Frame timer**: a controllable [`FrameTimer`] that produces frame clocks for
//!   real-time or fixed-step (headless) loops
//! - **Configuration errors**: [`ConfigError`], reported once at setup
//!
//! # Example
//!
//! ```rust
//! use scrollscape_core::{FrameTimer, ScrollState, Vec3, WorldTransform};
//!
//! let mut timer = FrameTimer::new();
//! let clock = timer.advance(1.0 / 60.0);
//! assert!(clock.delta > 0.0);
//!
//! let world = WorldTransform::new(15.0, 0.0, 1.0);
//! let label = world.apply(Vec3::new(-15.0, -3.5, 0.0));
//! assert_eq!(label.x, 0.0);
//!
//! assert_eq!(ScrollState::resolve(None).offset, 0.0);
//! ```

pub mod clock;
pub mod error;
pub mod frame;
pub mod math;

pub use clock::FrameTimer;
pub use error::{ensure_finite, ensure_positive, ensure_range, ConfigError, Result};
pub use frame::{FrameClock, ScrollState, WorldTransform};
pub use math::Vec3;
