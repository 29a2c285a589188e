//! Choreography configuration
//!
//! Every field has a default matching the reference scene, so an empty TOML
//! file is a valid configuration. Values are checked once, when the
//! choreographer is built.

use crate::error::{Result, SceneError};
use scrollscape_animation::{CyclicPath, EdgeFade, Fader, Hover, Pulse, ShockwaveSet, Spin};
use scrollscape_core::{ensure_finite, ensure_positive, ensure_range, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level choreography configuration (scrollscape.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoreographyConfig {
    #[serde(default)]
    pub travel: TravelConfig,
    #[serde(default)]
    pub fade: FadeConfig,
    #[serde(default)]
    pub pulses: PulseTrailConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

/// World travel driven by the scroll offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Distance between neighbouring stages; the world travels from
    /// `+distance` to `-distance` (before layout scaling)
    pub distance: f32,
    /// Peak recession of the world at mid-scroll
    pub depth_amplitude: f32,
    /// Damping rate for horizontal travel
    pub position_rate: f32,
    /// Damping rate for depth
    pub depth_rate: f32,
    /// Damping rate for layout scale changes
    pub scale_rate: f32,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            distance: 15.0,
            depth_amplitude: 2.0,
            position_rate: 2.0,
            depth_rate: 2.0,
            scale_rate: 4.0,
        }
    }
}

/// Label visibility around the focal point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// World distance at which labels vanish
    pub max_distance: f32,
    /// Subtitle opacity as a fraction of the title's
    pub subtitle_ratio: f32,
    /// Labels closer than this are emphasized
    pub active_distance: f32,
    /// Title scale while emphasized
    pub active_scale: f32,
    /// Title scale otherwise
    pub idle_scale: f32,
    /// Damping rate of the title scale
    pub emphasis_rate: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            max_distance: 10.0,
            subtitle_ratio: 0.7,
            active_distance: 7.0,
            active_scale: 1.0,
            idle_scale: 0.8,
            emphasis_rate: 6.0,
        }
    }
}

/// Data pulses travelling along the connector between stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTrailConfig {
    pub count: usize,
    pub speed: f32,
    pub total_length: f32,
    pub half_extent: f32,
    pub fade_threshold: f32,
    pub base_opacity: f32,
}

impl Default for PulseTrailConfig {
    fn default() -> Self {
        Self {
            count: 5,
            speed: 6.0,
            total_length: 30.0,
            half_extent: 15.0,
            fade_threshold: 12.0,
            base_opacity: 1.0,
        }
    }
}

impl PulseTrailConfig {
    pub fn path(&self) -> std::result::Result<CyclicPath, ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyCount {
                name: "pulse count",
            });
        }
        CyclicPath::new(
            self.speed,
            self.total_length,
            self.half_extent,
            EdgeFade::new(self.fade_threshold, self.base_opacity),
        )
    }
}

/// Background lines streaming along the depth axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub count: usize,
    /// Multiplier applied to every line's own speed
    pub speed_scale: f32,
    pub total_length: f32,
    pub half_extent: f32,
    pub opacity: f32,
    /// Horizontal spread of line placement
    pub spread_x: f32,
    /// Vertical spread of line placement
    pub spread_y: f32,
    pub max_width: f32,
    pub min_length: f32,
    pub length_range: f32,
    pub min_speed: f32,
    pub speed_range: f32,
    pub offset_range: f32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            count: 40,
            speed_scale: 15.0,
            total_length: 40.0,
            half_extent: 20.0,
            opacity: 0.5,
            spread_x: 20.0,
            spread_y: 12.0,
            max_width: 0.1,
            min_length: 10.0,
            length_range: 20.0,
            min_speed: 0.2,
            speed_range: 0.5,
            offset_range: 20.0,
        }
    }
}

impl StreamConfig {
    /// Path for a line with its own `speed` factor
    pub fn path(&self, speed: f32) -> std::result::Result<CyclicPath, ConfigError> {
        CyclicPath::new(
            speed * self.speed_scale,
            self.total_length,
            self.half_extent,
            EdgeFade::constant(self.opacity),
        )
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        ensure_finite("stream speed scale", self.speed_scale)?;
        ensure_positive("stream spread x", self.spread_x)?;
        ensure_positive("stream spread y", self.spread_y)?;
        ensure_finite("stream max width", self.max_width)?;
        ensure_positive("stream min length", self.min_length)?;
        ensure_finite("stream length range", self.length_range)?;
        ensure_finite("stream min speed", self.min_speed)?;
        ensure_finite("stream speed range", self.speed_range)?;
        ensure_finite("stream offset range", self.offset_range)?;
        self.path(self.min_speed)?;
        Ok(())
    }
}

/// Time-driven motion of individual stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Breathing of the atom-brain core
    pub core_pulse: Pulse,
    /// Rotation of the blueprint voxel cloud
    pub blueprint_spin: Spin,
    /// Rotation of the atom-brain rings
    pub ring_spin: Spin,
    /// Rings expanding around the atom brain
    pub shockwaves: ShockwaveSet,
    /// Float of the atom-brain core
    pub core_hover: Hover,
    /// Float of the result stack
    pub stack_hover: Hover,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            core_pulse: Pulse::default(),
            blueprint_spin: Spin::around_y(0.05),
            ring_spin: Spin::new(0.15, 0.1, 0.0),
            shockwaves: ShockwaveSet::default(),
            core_hover: Hover::new(5.0, 0.5, 0.2),
            stack_hover: Hover::new(2.0, 0.2, 0.5),
        }
    }
}

impl MotionConfig {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.core_pulse.validate()?;
        self.blueprint_spin.validate()?;
        self.ring_spin.validate()?;
        self.shockwaves.validate()?;
        self.core_hover.validate()?;
        self.stack_hover.validate()?;
        Ok(())
    }
}

/// Responsive layout thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport widths strictly below this are mobile
    pub mobile_breakpoint: f32,
    pub mobile_scale: f32,
    pub desktop_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 10.0,
            mobile_scale: 0.6,
            desktop_scale: 1.0,
        }
    }
}

/// Procedurally placed static content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for voxel and stream placement
    pub seed: u64,
    pub voxel_count: usize,
    /// Edge length of the cube voxels are scattered in
    pub voxel_spread: f32,
    /// Grid step voxel positions snap to
    pub voxel_snap: f32,
    pub bead_count: usize,
    pub bead_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0x5C20_11DE,
            voxel_count: 200,
            voxel_spread: 4.0,
            voxel_snap: 0.5,
            bead_count: 20,
            bead_radius: 3.0,
        }
    }
}

impl ChoreographyConfig {
    /// Load configuration from a file, or from `scrollscape.toml` inside a directory
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("scrollscape.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| SceneError::Io {
            path: config_path.clone(),
            source,
        })?;

        let config: ChoreographyConfig =
            toml::from_str(&content).map_err(|source| SceneError::Parse {
                path: config_path.clone(),
                source,
            })?;

        tracing::debug!(path = %config_path.display(), "loaded choreography config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Label fader built from the fade section
    pub fn fader(&self) -> std::result::Result<Fader, ConfigError> {
        Fader::new(self.fade.max_distance, self.fade.subtitle_ratio)
    }

    /// Check every value once; the choreographer refuses to start otherwise.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let travel = &self.travel;
        ensure_positive("travel distance", travel.distance)?;
        ensure_finite("depth amplitude", travel.depth_amplitude)?;
        ensure_positive("position damping rate", travel.position_rate)?;
        ensure_positive("depth damping rate", travel.depth_rate)?;
        ensure_positive("scale damping rate", travel.scale_rate)?;

        self.fader()?;
        let fade = &self.fade;
        ensure_positive("active distance", fade.active_distance)?;
        ensure_positive("active title scale", fade.active_scale)?;
        ensure_positive("idle title scale", fade.idle_scale)?;
        ensure_positive("emphasis damping rate", fade.emphasis_rate)?;

        self.pulses.path()?;
        self.stream.validate()?;
        self.motion.validate()?;

        let layout = &self.layout;
        ensure_positive("mobile breakpoint", layout.mobile_breakpoint)?;
        ensure_positive("mobile scale", layout.mobile_scale)?;
        ensure_positive("desktop scale", layout.desktop_scale)?;

        let scene = &self.scene;
        ensure_positive("voxel spread", scene.voxel_spread)?;
        ensure_positive("voxel snap", scene.voxel_snap)?;
        ensure_range("bead radius", scene.bead_radius, 0.0, f32::MAX)?;
        Ok(())
    }
}
