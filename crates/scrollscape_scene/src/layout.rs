//! Responsive layout policy.
//!
//! Viewport widths are measured in world units, the same space as the scene
//! geometry. The policy is stateless and cheap, so the choreographer
//! re-evaluates it every frame and picks up live resizes and orientation
//! changes without a reload.

use crate::config::LayoutConfig;
use scrollscape_core::{ensure_positive, Result};
use serde::Serialize;

/// Text sizing for stage labels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTier {
    /// Wide viewports
    Regular,
    /// Narrow viewports: smaller type, tighter wrapping
    Compact,
}

impl TextTier {
    pub fn title_size(&self) -> f32 {
        match self {
            TextTier::Regular => 1.0,
            TextTier::Compact => 0.6,
        }
    }

    pub fn subtitle_size(&self) -> f32 {
        match self {
            TextTier::Regular => 0.25,
            TextTier::Compact => 0.18,
        }
    }

    /// Wrapping width for label text, in world units
    pub fn max_width(&self) -> f32 {
        match self {
            TextTier::Regular => 10.0,
            TextTier::Compact => 4.0,
        }
    }

    /// Subtitle offset below its title
    pub fn subtitle_gap(&self) -> f32 {
        match self {
            TextTier::Regular => 0.8,
            TextTier::Compact => 0.6,
        }
    }
}

/// Layout decision for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutTier {
    pub is_mobile: bool,
    /// Uniform scale of the stage group
    pub scale: f32,
    /// Horizontal travel bound: the world moves from `+travel` to `-travel`
    pub travel: f32,
    pub text: TextTier,
}

impl LayoutTier {
    /// World X at scroll offset 0
    pub fn start_x(&self) -> f32 {
        self.travel
    }

    /// World X at scroll offset 1
    pub fn end_x(&self) -> f32 {
        -self.travel
    }
}

/// Maps viewport width to a [`LayoutTier`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPolicy {
    breakpoint: f32,
    mobile_scale: f32,
    desktop_scale: f32,
    travel_distance: f32,
}

impl LayoutPolicy {
    pub fn new(config: &LayoutConfig, travel_distance: f32) -> Result<Self> {
        Ok(Self {
            breakpoint: ensure_positive("mobile breakpoint", config.mobile_breakpoint)?,
            mobile_scale: ensure_positive("mobile scale", config.mobile_scale)?,
            desktop_scale: ensure_positive("desktop scale", config.desktop_scale)?,
            travel_distance: ensure_positive("travel distance", travel_distance)?,
        })
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    pub fn desktop(&self) -> LayoutTier {
        LayoutTier {
            is_mobile: false,
            scale: self.desktop_scale,
            travel: self.travel_distance * self.desktop_scale,
            text: TextTier::Regular,
        }
    }

    pub fn mobile(&self) -> LayoutTier {
        LayoutTier {
            is_mobile: true,
            scale: self.mobile_scale,
            travel: self.travel_distance * self.mobile_scale,
            text: TextTier::Compact,
        }
    }

    /// Classify a viewport width.
    ///
    /// Widths strictly below the breakpoint are mobile. A missing, non-finite
    /// or non-positive width means the viewport is not known yet and falls
    /// back to desktop.
    pub fn classify(&self, viewport_width: Option<f32>) -> LayoutTier {
        match viewport_width {
            Some(width) if width.is_finite() && width > 0.0 => {
                if width < self.breakpoint {
                    self.mobile()
                } else {
                    self.desktop()
                }
            }
            Some(width) => {
                tracing::warn!(width, "unusable viewport width, using desktop layout");
                self.desktop()
            }
            None => self.desktop(),
        }
    }
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        let config = LayoutConfig::default();
        Self {
            breakpoint: config.mobile_breakpoint,
            mobile_scale: config.mobile_scale,
            desktop_scale: config.desktop_scale,
            travel_distance: 15.0,
        }
    }
}

/// Classify with the reference thresholds.
pub fn classify(viewport_width: f32) -> LayoutTier {
    LayoutPolicy::default().classify(Some(viewport_width))
}
