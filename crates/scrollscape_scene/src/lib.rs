//! Scrollscape Scene Choreography
//!
//! Turns a scroll offset and a frame clock into per-frame transforms and
//! opacities for a three-stage scene that the user travels through by
//! scrolling.
//!
//! - **Layout policy**: viewport width ⇒ scale, travel distance and text tier
//! - **Scene description**: static stage, label and particle layout, built once
//! - **Choreographer**: the per-frame update pass over a registry of animated
//!   objects
//!
//! # Example
//!
//! ```rust
//! use scrollscape_core::{FrameTimer, ScrollState};
//! use scrollscape_scene::{ChoreographyConfig, SceneChoreographer, StageKind};
//!
//! let mut choreographer = SceneChoreographer::new(ChoreographyConfig::default()).unwrap();
//! let mut timer = FrameTimer::new();
//!
//! let frame = choreographer.update(Some(ScrollState::new(0.0)), timer.advance(1.0 / 60.0), Some(16.0));
//! let blueprint = frame.stage(StageKind::Blueprint).unwrap();
//! assert!(blueprint.opacity > 0.99);
//! ```

pub mod choreographer;
pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod procgen;
pub mod scene;

pub use choreographer::{target_depth, target_position_x, SceneChoreographer};
pub use config::ChoreographyConfig;
pub use error::{Result, SceneError};
pub use layout::{classify, LayoutPolicy, LayoutTier, TextTier};
pub use output::{FrameOutput, LabelFrame, ParticleFrame, StageFrame, StreamFrame, WorldTarget};
pub use scene::{SceneDescription, StageKind};
