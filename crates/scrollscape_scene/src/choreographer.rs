//! Scene choreographer
//!
//! Reads the scroll offset and frame clock once per frame, moves the shared
//! world transform through damped trackers and derives every stage object's
//! opacity and local motion from it.
//!
//! Within one frame the world transform is updated first; every fade and
//! emphasis decision in the same frame reads the updated transform.

use crate::config::ChoreographyConfig;
use crate::error::Result;
use crate::layout::{LayoutPolicy, LayoutTier};
use crate::output::{FrameOutput, LabelFrame, ParticleFrame, StageFrame, StreamFrame, WorldTarget};
use crate::scene::{SceneDescription, StageKind};
use scrollscape_animation::{CyclicPath, Fader, TrackerBank, TrackerId, TravelingParticle};
use scrollscape_core::{FrameClock, ScrollState, Vec3, WorldTransform};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::f32::consts::PI;

new_key_type! {
    /// Handle of an object in the choreographer's registry
    pub struct ObjectKey;
}

/// Horizontal world target: `start_x` at offset 0, `end_x` at offset 1, linear
/// in between and beyond.
pub fn target_position_x(offset: f32, tier: &LayoutTier) -> f32 {
    let (start_x, end_x) = (tier.start_x(), tier.end_x());
    start_x - offset * (start_x - end_x)
}

/// Depth dip `sin(offset * π) * amplitude`, deepest at mid-scroll.
pub fn target_depth(offset: f32, amplitude: f32) -> f32 {
    (offset * PI).sin() * amplitude
}

#[derive(Clone, Copy, Debug)]
enum ObjectRole {
    Stage(StageKind),
    Label {
        stage: StageKind,
        /// Tracker holding the title's emphasis scale
        emphasis: TrackerId,
    },
}

/// A registered object: what it is and where it was authored
#[derive(Clone, Copy, Debug)]
struct AnimatedObject {
    role: ObjectRole,
    local_position: Vec3,
}

struct WorldTrackers {
    x: TrackerId,
    z: TrackerId,
    scale: TrackerId,
}

/// Drives the whole scene from scroll progress and time
pub struct SceneChoreographer {
    config: ChoreographyConfig,
    scene: SceneDescription,
    policy: LayoutPolicy,
    fader: Fader,
    pulse_path: CyclicPath,
    pulses: Vec<TravelingParticle>,
    stream_paths: Vec<CyclicPath>,
    trackers: TrackerBank,
    world: WorldTrackers,
    objects: SlotMap<ObjectKey, AnimatedObject>,
    tier: LayoutTier,
    frame: u64,
    /// Last usable elapsed time, held when the clock reports garbage
    last_elapsed: f32,
}

impl SceneChoreographer {
    /// Validate `config`, build the static scene and register its objects.
    pub fn new(config: ChoreographyConfig) -> Result<Self> {
        config.validate()?;

        let scene = SceneDescription::build(&config);
        let policy = LayoutPolicy::new(&config.layout, config.travel.distance)?;
        let fader = config.fader()?;
        let pulse_path = config.pulses.path()?;
        let pulses = pulse_path.particles(config.pulses.count);
        let stream_paths = scene
            .stream
            .iter()
            .map(|line| config.stream.path(line.speed))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let tier = policy.desktop();
        let mut trackers = TrackerBank::new();
        let world = WorldTrackers {
            x: trackers.add(tier.start_x(), config.travel.position_rate)?,
            z: trackers.add(0.0, config.travel.depth_rate)?,
            scale: trackers.add(tier.scale, config.travel.scale_rate)?,
        };

        let mut objects = SlotMap::with_key();
        for stage in &scene.stages {
            objects.insert(AnimatedObject {
                role: ObjectRole::Stage(stage.kind),
                local_position: stage.position,
            });
        }
        for label in &scene.labels {
            let emphasis = trackers.add(config.fade.idle_scale, config.fade.emphasis_rate)?;
            objects.insert(AnimatedObject {
                role: ObjectRole::Label {
                    stage: label.stage,
                    emphasis,
                },
                local_position: label.position,
            });
        }

        tracing::debug!(
            objects = objects.len(),
            trackers = trackers.len(),
            pulses = pulses.len(),
            stream_lines = stream_paths.len(),
            "scene choreographer ready"
        );

        Ok(Self {
            config,
            scene,
            policy,
            fader,
            pulse_path,
            pulses,
            stream_paths,
            trackers,
            world,
            objects,
            tier,
            frame: 0,
            last_elapsed: 0.0,
        })
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    /// Layout tier used by the most recent frame
    pub fn tier(&self) -> LayoutTier {
        self.tier
    }

    /// Frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Current (damped) world transform
    pub fn world(&self) -> WorldTransform {
        WorldTransform::new(
            self.trackers.value(self.world.x),
            self.trackers.value(self.world.z),
            self.trackers.value(self.world.scale),
        )
    }

    /// Whether any damped value is still further than `epsilon` from its target
    pub fn is_settling(&self, epsilon: f32) -> bool {
        self.trackers.has_active(epsilon)
    }

    /// Undamped targets for an offset under a layout tier
    pub fn targets(&self, offset: f32, tier: &LayoutTier) -> WorldTarget {
        WorldTarget {
            position_x: target_position_x(offset, tier),
            depth: target_depth(offset, self.config.travel.depth_amplitude),
        }
    }

    /// Run one frame.
    ///
    /// A missing scroll source counts as offset 0 and a missing viewport as
    /// desktop. A non-finite clock holds the last usable time. The very first
    /// frame starts at rest on its targets instead of sliding in from the
    /// construction defaults.
    pub fn update(
        &mut self,
        scroll: Option<ScrollState>,
        clock: FrameClock,
        viewport_width: Option<f32>,
    ) -> FrameOutput {
        let offset = ScrollState::resolve(scroll).offset;
        let clock = clock.resolve(self.last_elapsed);
        self.last_elapsed = clock.elapsed;
        let tier = self.policy.classify(viewport_width);
        if tier.is_mobile != self.tier.is_mobile {
            tracing::info!(
                mobile = tier.is_mobile,
                scale = tier.scale,
                "layout tier changed"
            );
        }
        self.tier = tier;

        let target = self.targets(offset, &tier);
        let first_frame = self.frame == 0;
        let world = self.step_world(&target, &tier, clock.delta, first_frame);

        tracing::trace!(
            frame = self.frame,
            offset,
            x = world.position_x,
            z = world.position_z,
            scale = world.scale,
            "world transform"
        );

        let elapsed = clock.elapsed;
        let mut stages = Vec::with_capacity(StageKind::ALL.len());
        let mut labels = Vec::with_capacity(self.scene.labels.len());

        for (_, object) in self.objects.iter() {
            let world_position = world.apply(object.local_position);
            let distance = world_position.x.abs();

            match object.role {
                ObjectRole::Stage(kind) => {
                    stages.push(self.stage_frame(kind, world_position, distance, elapsed));
                }
                ObjectRole::Label { stage, emphasis } => {
                    let fade = &self.config.fade;
                    let active = distance < fade.active_distance;
                    let emphasis_target = if active {
                        fade.active_scale
                    } else {
                        fade.idle_scale
                    };
                    let title_scale = if first_frame {
                        if let Some(tracker) = self.trackers.get_mut(emphasis) {
                            tracker.snap_to(emphasis_target);
                        }
                        emphasis_target
                    } else {
                        self.trackers.chase(emphasis, emphasis_target, clock.delta)
                    };
                    let (title_opacity, subtitle_opacity) = self.fader.pair(distance);
                    let text = tier.text;
                    let gap = Vec3::new(0.0, text.subtitle_gap() * world.scale, 0.0);
                    labels.push(LabelFrame {
                        stage,
                        world_position,
                        subtitle_position: world_position - gap,
                        title_opacity,
                        subtitle_opacity,
                        title_scale,
                        title_size: text.title_size(),
                        subtitle_size: text.subtitle_size(),
                        max_width: text.max_width(),
                        active,
                    });
                }
            }
        }

        let pulses = self
            .pulses
            .iter()
            .map(|particle| {
                let sample = particle.sample(&self.pulse_path, elapsed);
                ParticleFrame {
                    local_x: sample.position,
                    world_position: world.apply(Vec3::on_axis(sample.position)),
                    opacity: sample.opacity,
                }
            })
            .collect();

        let stream = self
            .scene
            .stream
            .iter()
            .zip(&self.stream_paths)
            .map(|(line, path)| {
                let sample = path.sample(elapsed, line.offset);
                StreamFrame {
                    local_position: Vec3::new(line.x, line.y, sample.position),
                    opacity: sample.opacity,
                }
            })
            .collect();

        let output = FrameOutput {
            frame: self.frame,
            elapsed,
            offset,
            tier,
            target,
            world,
            stages,
            labels,
            pulses,
            stream,
        };
        self.frame += 1;
        output
    }

    fn step_world(
        &mut self,
        target: &WorldTarget,
        tier: &LayoutTier,
        dt: f32,
        snap: bool,
    ) -> WorldTransform {
        let goals = [
            (self.world.x, target.position_x),
            (self.world.z, -target.depth),
            (self.world.scale, tier.scale),
        ];
        for (id, goal) in goals {
            if snap {
                if let Some(tracker) = self.trackers.get_mut(id) {
                    tracker.snap_to(goal);
                }
            } else {
                self.trackers.chase(id, goal, dt);
            }
        }
        self.world()
    }

    fn stage_frame(
        &self,
        kind: StageKind,
        world_position: Vec3,
        distance: f32,
        elapsed: f32,
    ) -> StageFrame {
        let motion = &self.config.motion;
        let mut frame = StageFrame {
            kind,
            world_position,
            opacity: self.fader.opacity(distance),
            rotation: Vec3::ZERO,
            core_scale: 1.0,
            hover: None,
            shockwaves: SmallVec::new(),
        };
        match kind {
            StageKind::Blueprint => {
                frame.rotation = motion.blueprint_spin.angles(elapsed);
            }
            StageKind::AtomBrain => {
                frame.rotation = motion.ring_spin.angles(elapsed);
                frame.core_scale = motion.core_pulse.scale(elapsed);
                frame.hover = Some(motion.core_hover.sample(elapsed));
                frame.shockwaves = motion.shockwaves.samples(elapsed);
            }
            StageKind::ResultStack => {
                frame.hover = Some(motion.stack_hover.sample(elapsed));
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::classify;

    const DT: f32 = 0.016;

    fn choreographer() -> SceneChoreographer {
        SceneChoreographer::new(ChoreographyConfig::default()).unwrap()
    }

    #[test]
    fn test_target_x_endpoints() {
        let desktop = classify(16.0);
        assert_eq!(target_position_x(0.0, &desktop), 15.0);
        assert_eq!(target_position_x(1.0, &desktop), -15.0);
        assert_eq!(target_position_x(0.5, &desktop), 0.0);

        let mobile = classify(6.0);
        assert_eq!(target_position_x(0.0, &mobile), mobile.start_x());
        assert_eq!(target_position_x(1.0, &mobile), mobile.end_x());
    }

    #[test]
    fn test_target_x_tolerates_overscroll() {
        let desktop = classify(16.0);
        assert_eq!(target_position_x(1.5, &desktop), -30.0);
        assert_eq!(target_position_x(-0.5, &desktop), 30.0);
    }

    #[test]
    fn test_depth_peaks_at_mid_scroll() {
        assert_eq!(target_depth(0.5, 2.0), 2.0);
        assert!(target_depth(0.0, 2.0).abs() < 1e-6);
        assert!(target_depth(1.0, 2.0).abs() < 1e-6);
        let mut o = 0.0;
        while o <= 1.0 {
            assert!(target_depth(o, 2.0) <= 2.0);
            o += 0.01;
        }
    }

    #[test]
    fn test_first_frame_rests_on_targets() {
        let mut c = choreographer();
        let frame = c.update(Some(ScrollState::new(0.0)), FrameClock::new(0.0, 0.0), None);
        assert_eq!(frame.world, WorldTransform::new(15.0, 0.0, 1.0));
        assert_eq!(frame.frame, 0);

        let blueprint = frame.stage(StageKind::Blueprint).unwrap();
        assert_eq!(blueprint.world_position.x, 0.0);
        assert_eq!(blueprint.opacity, 1.0);

        let label = frame.label(StageKind::Blueprint).unwrap();
        assert!(label.active);
        assert_eq!(label.title_scale, 1.0);
        assert_eq!(label.title_opacity, 1.0);
        assert!((label.subtitle_opacity - 0.7).abs() < 1e-6);

        assert_eq!(label.title_size, 1.0);
        assert_eq!(label.max_width, 10.0);
        assert!((label.subtitle_position.y - (label.world_position.y - 0.8)).abs() < 1e-6);

        let engine = frame.label(StageKind::AtomBrain).unwrap();
        assert!(!engine.active);
        assert_eq!(engine.title_scale, 0.8);
        assert_eq!(engine.world_position.x, 15.0);
        assert_eq!(engine.title_opacity, 0.0);
    }

    #[test]
    fn test_zero_delta_holds_world() {
        let mut c = choreographer();
        c.update(None, FrameClock::new(0.0, 0.0), None);
        let frame = c.update(Some(ScrollState::new(1.0)), FrameClock::new(0.0, 0.0), None);
        assert_eq!(frame.world.position_x, 15.0);
        assert_eq!(frame.target.position_x, -15.0);
    }

    #[test]
    fn test_missing_scroll_defaults_to_top() {
        let mut c = choreographer();
        let frame = c.update(None, FrameClock::new(0.0, DT), None);
        assert_eq!(frame.offset, 0.0);
        assert_eq!(frame.target.position_x, 15.0);
    }

    #[test]
    fn test_oscillators_run_regardless_of_scroll() {
        let mut c = choreographer();
        let a = c.update(Some(ScrollState::new(0.0)), FrameClock::new(1.0, DT), None);
        let mut c = choreographer();
        let b = c.update(Some(ScrollState::new(1.0)), FrameClock::new(1.0, DT), None);

        let brain_a = a.stage(StageKind::AtomBrain).unwrap();
        let brain_b = b.stage(StageKind::AtomBrain).unwrap();
        assert_eq!(brain_a.core_scale, brain_b.core_scale);
        assert_eq!(brain_a.rotation, brain_b.rotation);
        assert_eq!(brain_a.shockwaves, brain_b.shockwaves);
        assert_eq!(brain_a.shockwaves.len(), 2);

        let locals_a: Vec<f32> = a.pulses.iter().map(|p| p.local_x).collect();
        let locals_b: Vec<f32> = b.pulses.iter().map(|p| p.local_x).collect();
        assert_eq!(locals_a, locals_b);
        assert_eq!(a.pulses.len(), 5);
        assert_eq!(a.stream.len(), 40);
    }

    #[test]
    fn test_stage_specific_motion() {
        let mut c = choreographer();
        let frame = c.update(None, FrameClock::new(10.0, DT), None);

        let blueprint = frame.stage(StageKind::Blueprint).unwrap();
        assert!((blueprint.rotation.y - 0.5).abs() < 1e-5);
        assert!(blueprint.hover.is_none());
        assert!(blueprint.shockwaves.is_empty());
        assert_eq!(blueprint.core_scale, 1.0);

        let stack = frame.stage(StageKind::ResultStack).unwrap();
        assert!(stack.hover.is_some());
        assert_eq!(stack.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_non_finite_clock_holds_last_time() {
        let mut c = choreographer();
        let good = c.update(Some(ScrollState::new(0.5)), FrameClock::new(1.0, DT), None);
        let bad = c.update(
            Some(ScrollState::new(0.5)),
            FrameClock::new(f32::NAN, f32::NAN),
            None,
        );

        assert_eq!(bad.elapsed, 1.0);
        assert_eq!(bad.world, good.world);
        assert_eq!(bad.stages, good.stages);
        for stage in &bad.stages {
            assert!((0.0..=1.0).contains(&stage.opacity));
            assert!(stage.core_scale.is_finite());
            for ring in &stage.shockwaves {
                assert!(ring.radius.is_finite());
                assert!((0.0..=1.0).contains(&ring.opacity));
            }
        }
        for pulse in &bad.pulses {
            assert!((0.0..=1.0).contains(&pulse.opacity));
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = ChoreographyConfig::default();
        config.fade.max_distance = 0.0;
        assert!(SceneChoreographer::new(config).is_err());
    }
}
