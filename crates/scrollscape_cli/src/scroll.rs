//! Scripted scroll input for headless runs

use clap::ValueEnum;
use scrollscape_core::ScrollState;

/// How the simulated user scrolls over a run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScrollScript {
    /// Steady scroll from top to bottom
    Linear,
    /// Sit at the top for the first half, then jump straight to the bottom
    Jump,
    /// Scroll down and back up
    Bounce,
}

impl ScrollScript {
    /// Scroll state for `frame` out of `frames`
    pub fn state_at(&self, frame: u64, frames: u64) -> ScrollState {
        let progress = if frames > 1 {
            frame as f32 / (frames - 1) as f32
        } else {
            0.0
        };
        let offset = match self {
            ScrollScript::Linear => progress,
            ScrollScript::Jump => {
                if progress < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
            ScrollScript::Bounce => 1.0 - (2.0 * progress - 1.0).abs(),
        };
        ScrollState::new(offset)
    }
}
