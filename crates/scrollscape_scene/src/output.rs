//! Per-frame output snapshot handed to the renderer

use crate::layout::LayoutTier;
use crate::scene::StageKind;
use scrollscape_animation::{HoverSample, RingSample};
use scrollscape_core::{Vec3, WorldTransform};
use serde::Serialize;
use smallvec::SmallVec;

/// Undamped world targets derived from the scroll offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WorldTarget {
    pub position_x: f32,
    /// Recession magnitude; the world Z target is `-depth`
    pub depth: f32,
}

/// A stage's values for this frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StageFrame {
    pub kind: StageKind,
    pub world_position: Vec3,
    pub opacity: f32,
    /// Rotation of the stage's spinning assembly (voxel cloud or rings)
    pub rotation: Vec3,
    /// Uniform scale of the stage's core mesh
    pub core_scale: f32,
    pub hover: Option<HoverSample>,
    pub shockwaves: SmallVec<[RingSample; 4]>,
}

/// A label's values for this frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LabelFrame {
    pub stage: StageKind,
    /// Title anchor
    pub world_position: Vec3,
    /// Subtitle anchor, below the title by the tier's gap
    pub subtitle_position: Vec3,
    pub title_opacity: f32,
    pub subtitle_opacity: f32,
    /// Emphasis multiplier on top of `title_size`
    pub title_scale: f32,
    pub title_size: f32,
    pub subtitle_size: f32,
    /// Wrapping width for both lines
    pub max_width: f32,
    pub active: bool,
}

/// One data pulse on the connector
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParticleFrame {
    /// Position along the connector, before the world transform
    pub local_x: f32,
    pub world_position: Vec3,
    pub opacity: f32,
}

/// One background stream line
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StreamFrame {
    pub local_position: Vec3,
    pub opacity: f32,
}

/// Everything a renderer needs to apply for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameOutput {
    pub frame: u64,
    pub elapsed: f32,
    pub offset: f32,
    pub tier: LayoutTier,
    pub target: WorldTarget,
    pub world: WorldTransform,
    pub stages: Vec<StageFrame>,
    pub labels: Vec<LabelFrame>,
    pub pulses: Vec<ParticleFrame>,
    pub stream: Vec<StreamFrame>,
}

impl FrameOutput {
    pub fn stage(&self, kind: StageKind) -> Option<&StageFrame> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    pub fn label(&self, kind: StageKind) -> Option<&LabelFrame> {
        self.labels.iter().find(|l| l.stage == kind)
    }

    /// The stage whose label is closest to the focal point
    pub fn focused_stage(&self) -> Option<StageKind> {
        self.labels
            .iter()
            .max_by(|a, b| a.title_opacity.total_cmp(&b.title_opacity))
            .filter(|l| l.title_opacity > 0.0)
            .map(|l| l.stage)
    }
}
