//! Scrollscape CLI
//!
//! Runs the scroll choreography headless:
//! - `simulate`: drive the choreographer with a scripted scroll and print frames
//! - `config`: write the default configuration file

mod scroll;
mod summary;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use scroll::ScrollScript;
use scrollscape_core::FrameTimer;
use scrollscape_scene::{ChoreographyConfig, SceneChoreographer};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use summary::RunSummary;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Headless runner for scroll-driven scene choreography
#[derive(Parser, Debug)]
#[command(name = "scrollscape")]
#[command(about = "Headless runner for scroll-driven scene choreography")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate frames with a scripted scroll
    Simulate(SimulateArgs),

    /// Write the default configuration
    Config {
        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Configuration file, or a directory containing scrollscape.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "240")]
    frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value = "60")]
    fps: f64,

    /// Playback speed multiplier (clamped to 0.1..10)
    #[arg(long, default_value = "1.0")]
    speed: f64,

    /// Viewport width in world units (omit for an unknown viewport)
    #[arg(long)]
    viewport: Option<f32>,

    /// Scroll script
    #[arg(long, value_enum, default_value = "linear")]
    scroll: ScrollScript,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per frame
    Json,
    /// Aggregated run statistics
    Summary,
    /// Aggregated run statistics as one JSON object
    SummaryJson,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Simulate(args) => cmd_simulate(args),
        Commands::Config { output } => cmd_config(output),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ChoreographyConfig> {
    match path {
        Some(path) => ChoreographyConfig::load_from_path(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ChoreographyConfig::default()),
    }
}

fn cmd_simulate(args: SimulateArgs) -> Result<()> {
    let SimulateArgs {
        config,
        frames,
        fps,
        speed,
        viewport,
        scroll,
        format,
    } = args;
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("--fps must be a positive number, got {fps}");
    }

    let config = load_config(config)?;
    let mut choreographer =
        SceneChoreographer::new(config).context("Invalid choreography config")?;
    let mut timer = FrameTimer::new();
    timer.set_speed(speed);
    let dt = 1.0 / fps;

    info!(frames, fps, speed = timer.speed(), ?scroll, ?viewport, "simulating");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut summary = RunSummary::default();

    for frame in 0..frames {
        let output = choreographer.update(
            Some(scroll.state_at(frame, frames)),
            timer.advance(dt),
            viewport,
        );
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &output)?;
                writeln!(out)?;
            }
            OutputFormat::Summary | OutputFormat::SummaryJson => summary.record(&output),
        }
    }

    summary.finish(!choreographer.is_settling(1e-3));
    match format {
        OutputFormat::Json => {}
        OutputFormat::Summary => writeln!(out, "{}", summary.report())?,
        OutputFormat::SummaryJson => {
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!(elapsed = timer.elapsed(), "simulation finished");
    Ok(())
}

fn cmd_config(output: Option<PathBuf>) -> Result<()> {
    let content = ChoreographyConfig::default().to_toml()?;
    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote default config to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
