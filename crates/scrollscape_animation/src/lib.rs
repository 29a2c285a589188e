//! Scrollscape Animation Primitives
//!
//! Pure, frame-rate independent building blocks for the scene choreographer.
//!
//! # Features
//!
//! - **Damping**: exponential approach toward a target, independent of frame rate
//! - **Distance fades**: linear opacity falloff from a focal point
//! - **Cyclic paths**: wrapping particle motion with edge fade-out
//! - **Oscillators**: pulse, spin, shockwave rings and hover, all pure functions
//!   of elapsed time

pub mod damp;
pub mod fade;
pub mod oscillator;
pub mod path;
pub mod scheduler;

pub use damp::{damp, DampedValue};
pub use fade::{fade, Fader};
pub use oscillator::{Hover, HoverSample, Pulse, RingSample, Shockwave, ShockwaveSet, Spin};
pub use path::{advance, evenly_spaced_seeds, CyclicPath, EdgeFade, PathSample, TravelingParticle};
pub use scheduler::{TrackerBank, TrackerId};
