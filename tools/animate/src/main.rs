//! Wave animation runner: builds a scene or JSON config, generates every
//! frame and prints a summary, or the whole sequence as JSON for a renderer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use wavefront_core::{AnimationSequence, AxisId, Scene, SceneLayout, WaveConfig};

#[derive(Parser, Debug)]
#[command(name = "animate", about = "Generate animation frames for a sinusoidal wave field")]
struct Args {
    /// Built-in scene: isosurface, time-cube or hyperspace. Defaults to
    /// isosurface; with --config it only selects the JSON layout.
    #[arg(short, long)]
    scene: Option<Scene>,

    /// JSON config file; replaces the scene's preset config.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Axis to sweep (repeatable, swept in the given order). Overrides the config.
    #[arg(short, long = "animate", value_name = "AXIS")]
    animate: Vec<AxisId>,

    /// Print the scene's config as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Print the layout and full animation sequence as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Figure<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<SceneLayout>,
    sequence: &'a AnimationSequence,
}

/// Layout for `--json`. A loaded config carries no scene, so a layout is
/// only emitted when `--scene` names one or no config was given.
fn figure_layout(args: &Args, config: &WaveConfig) -> Option<SceneLayout> {
    match (args.scene, &args.config) {
        (Some(scene), _) => Some(scene.layout(config)),
        (None, None) => Some(Scene::Isosurface.layout(config)),
        (None, Some(path)) => {
            warn!("No --scene given with {}; emitting sequence without a layout", path.display());
            None
        }
    }
}

fn load_config(args: &Args) -> Result<WaveConfig> {
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Cannot read config {}", path.display()))?;
            WaveConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => args.scene.unwrap_or(Scene::Isosurface).config(),
    };
    if args.animate.is_empty() {
        Ok(config)
    } else {
        let config = config.with_animated_axes(args.animate.clone());
        config.validate().context("Animated axis override rejected")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    for line in config.summary() {
        info!("{line}");
    }

    let sequence = config.run().context("Frame generation failed")?;
    if sequence.is_empty() {
        warn!("No frames generated; every sweep was empty");
    }

    if args.json {
        let figure = Figure { layout: figure_layout(&args, &config), sequence: &sequence };
        println!("{}", serde_json::to_string(&figure).context("Cannot serialise sequence")?);
        return Ok(());
    }

    println!("{} frames over {} grid cells", sequence.len(), sequence.coordinates.len());
    for (step, frame) in sequence.slider_steps().iter().zip(sequence.frames()) {
        println!(
            "  {:<10} {:>8}  [{:+.3}, {:+.3}]  {}",
            step.frame,
            step.label,
            frame.min_value(),
            frame.max_value(),
            frame.annotation
        );
    }
    Ok(())
}
