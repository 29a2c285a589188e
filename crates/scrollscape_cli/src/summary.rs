//! Run summary for `simulate --format summary` and `--format summary-json`

use scrollscape_core::WorldTransform;
use scrollscape_scene::{FrameOutput, StageKind};
use serde::Serialize;

/// Aggregated statistics over a simulated run
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed: f32,
    /// Largest horizontal world movement between two consecutive frames
    pub max_frame_step: f32,
    pub tier_changes: u32,
    /// Stages in the order they took focus
    pub focus_order: Vec<StageKind>,
    pub final_world: WorldTransform,
    /// Distance from the final world X to its target
    pub final_gap: f32,
    /// Whether every damped value had reached its target by the last frame
    pub settled: bool,
    #[serde(skip)]
    previous: Option<(f32, bool)>,
}

impl RunSummary {
    pub fn record(&mut self, frame: &FrameOutput) {
        if let Some((previous_x, was_mobile)) = self.previous {
            let step = (frame.world.position_x - previous_x).abs();
            self.max_frame_step = self.max_frame_step.max(step);
            if was_mobile != frame.tier.is_mobile {
                self.tier_changes += 1;
            }
        }
        if let Some(stage) = frame.focused_stage() {
            if self.focus_order.last() != Some(&stage) {
                self.focus_order.push(stage);
            }
        }

        self.frames += 1;
        self.elapsed = frame.elapsed;
        self.final_world = frame.world;
        self.final_gap = (frame.world.position_x - frame.target.position_x).abs();
        self.previous = Some((frame.world.position_x, frame.tier.is_mobile));
    }

    /// Close the run with the choreographer's settle state
    pub fn finish(&mut self, settled: bool) {
        self.settled = settled;
    }

    /// Human-readable report
    pub fn report(&self) -> String {
        let focus = self
            .focus_order
            .iter()
            .map(StageKind::name)
            .collect::<Vec<_>>()
            .join(" -> ");
        format!(
            "frames:          {}\n\
             elapsed:         {:.3}s\n\
             max frame step:  {:.4}\n\
             tier changes:    {}\n\
             focus order:     {}\n\
             final world:     x={:.4} z={:.4} scale={:.4}\n\
             final gap:       {:.4}\n\
             settled:         {}",
            self.frames,
            self.elapsed,
            self.max_frame_step,
            self.tier_changes,
            if focus.is_empty() { "-" } else { focus.as_str() },
            self.final_world.position_x,
            self.final_world.position_z,
            self.final_world.scale,
            self.final_gap,
            self.settled,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollscape_core::{FrameTimer, ScrollState};
    use scrollscape_scene::{ChoreographyConfig, SceneChoreographer};

    #[test]
    fn test_summary_tracks_focus_and_steps() {
        let mut choreographer = SceneChoreographer::new(ChoreographyConfig::default()).unwrap();
        let mut timer = FrameTimer::new();
        let mut summary = RunSummary::default();

        for _ in 0..10 {
            let frame = choreographer.update(
                Some(ScrollState::new(0.0)),
                timer.advance(0.016),
                Some(16.0),
            );
            summary.record(&frame);
        }
        for _ in 0..10 {
            let frame =
                choreographer.update(Some(ScrollState::new(0.0)), timer.advance(0.016), Some(6.0));
            summary.record(&frame);
        }

        assert_eq!(summary.frames, 20);
        assert_eq!(summary.tier_changes, 1);
        assert_eq!(summary.focus_order, vec![StageKind::Blueprint]);
        assert!(summary.max_frame_step > 0.0);
        assert!(summary.report().contains("blueprint"));

        summary.finish(!choreographer.is_settling(1e-3));
        assert!(!summary.settled);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["frames"], 20);
        assert_eq!(json["focus_order"][0], "blueprint");
        assert_eq!(json["settled"], false);
        assert!(json.get("previous").is_none());
    }
}
