//! Static scene description.
//!
//! Everything here is authored once, in local (pre-transform) coordinates of
//! the stage group, and never changes while the scene runs. The choreographer
//! reads it to know where things sit; renderers read it to build meshes.

use crate::config::ChoreographyConfig;
use crate::procgen::{Domain, KeyedRng};
use scrollscape_core::Vec3;
use serde::Serialize;

/// The three stages of the journey, in travel order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Scattered voxel cloud: raw ideas
    Blueprint,
    /// Pulsing core inside spinning rings: the engine
    AtomBrain,
    /// Stacked floating slabs: the finished product
    ResultStack,
}

impl StageKind {
    pub const ALL: [StageKind; 3] = [
        StageKind::Blueprint,
        StageKind::AtomBrain,
        StageKind::ResultStack,
    ];

    /// Position along the travel axis in units of the stage spacing
    pub fn slot(&self) -> f32 {
        match self {
            StageKind::Blueprint => -1.0,
            StageKind::AtomBrain => 0.0,
            StageKind::ResultStack => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StageKind::Blueprint => "blueprint",
            StageKind::AtomBrain => "atom_brain",
            StageKind::ResultStack => "result_stack",
        }
    }

    fn caption(&self) -> (&'static str, &'static str, f32) {
        match self {
            StageKind::Blueprint => ("YOUR IDEAS", "And Vision", -3.5),
            StageKind::AtomBrain => ("JXSOFT", "We make your dreams a reality", -4.0),
            StageKind::ResultStack => ("RESULTS", "Enjoy your vision brought to life", -3.5),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StageDescription {
    pub kind: StageKind,
    pub position: Vec3,
}

/// Title and subtitle floating under a stage
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelDescription {
    pub stage: StageKind,
    pub title: String,
    pub subtitle: String,
    pub position: Vec3,
}

/// One cube of the blueprint cloud, relative to the blueprint stage
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Voxel {
    pub position: Vec3,
    pub scale: f32,
}

/// One background line of the data stream
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StreamLine {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub length: f32,
    /// Speed factor, multiplied by the stream's speed scale
    pub speed: f32,
    /// Phase offset along the depth axis
    pub offset: f32,
}

/// Immutable layout of the whole scene
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneDescription {
    pub stages: Vec<StageDescription>,
    pub labels: Vec<LabelDescription>,
    pub voxels: Vec<Voxel>,
    /// Beads sitting on the atom-brain rings, relative to the atom brain
    pub ring_beads: Vec<Vec3>,
    pub stream: Vec<StreamLine>,
    /// Length of the faint connector the data pulses travel along
    pub connector_length: f32,
}

impl SceneDescription {
    pub fn build(config: &ChoreographyConfig) -> Self {
        let spacing = config.travel.distance;
        let rng = KeyedRng::new(config.scene.seed);

        let stages = StageKind::ALL
            .iter()
            .map(|&kind| StageDescription {
                kind,
                position: Vec3::on_axis(kind.slot() * spacing),
            })
            .collect();

        let labels = StageKind::ALL
            .iter()
            .map(|&kind| {
                let (title, subtitle, y) = kind.caption();
                LabelDescription {
                    stage: kind,
                    title: title.to_string(),
                    subtitle: subtitle.to_uppercase(),
                    position: Vec3::new(kind.slot() * spacing, y, 0.0),
                }
            })
            .collect();

        let scene = SceneDescription {
            stages,
            labels,
            voxels: build_voxels(config, &rng),
            ring_beads: build_ring_beads(config),
            stream: build_stream(config, &rng),
            connector_length: config.pulses.total_length,
        };

        tracing::debug!(
            voxels = scene.voxels.len(),
            beads = scene.ring_beads.len(),
            stream_lines = scene.stream.len(),
            "scene description built"
        );
        scene
    }

    pub fn stage(&self, kind: StageKind) -> Option<&StageDescription> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    pub fn label(&self, kind: StageKind) -> Option<&LabelDescription> {
        self.labels.iter().find(|l| l.stage == kind)
    }
}

fn snap(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

fn build_voxels(config: &ChoreographyConfig, rng: &KeyedRng) -> Vec<Voxel> {
    let scene = &config.scene;
    (0..scene.voxel_count as u64)
        .map(|i| {
            let axis = |channel| {
                snap(
                    rng.centered(Domain::Voxels, i, channel, scene.voxel_spread),
                    scene.voxel_snap,
                )
            };
            Voxel {
                position: Vec3::new(axis(0), axis(1), axis(2)),
                scale: rng.unit(Domain::Voxels, i, 3) * 0.5 + 0.5,
            }
        })
        .collect()
}

fn build_ring_beads(config: &ChoreographyConfig) -> Vec<Vec3> {
    let radius = config.scene.bead_radius;
    // Beads sit at whole-radian angles, scattering them around the ring
    (0..config.scene.bead_count)
        .map(|i| {
            let angle = i as f32;
            Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

fn build_stream(config: &ChoreographyConfig, rng: &KeyedRng) -> Vec<StreamLine> {
    let stream = &config.stream;
    (0..stream.count as u64)
        .map(|i| StreamLine {
            x: rng.centered(Domain::Stream, i, 0, stream.spread_x),
            y: rng.centered(Domain::Stream, i, 1, stream.spread_y),
            width: rng.unit(Domain::Stream, i, 2) * stream.max_width,
            length: rng.unit(Domain::Stream, i, 3) * stream.length_range + stream.min_length,
            speed: rng.unit(Domain::Stream, i, 4) * stream.speed_range + stream.min_speed,
            offset: rng.unit(Domain::Stream, i, 5) * stream.offset_range,
        })
        .collect()
}
