//! Keyboard Inset - replay keyboard lifecycle events and print the tracked state
//!
//! Usage: `keyboard-inset <script.json> [--export <out.json>] [--config <config.toml>]`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use keyboard_inset::{
    config::Config,
    replay::{replay, EventScript},
};

/// Replay keyboard lifecycle events and print the tracked state
#[derive(Parser, Debug)]
#[command(name = "keyboard-inset")]
#[command(about = "Replay keyboard lifecycle events and print the tracked state")]
#[command(version)]
struct Args {
    /// Event script (JSON array of keyboard events)
    script: PathBuf,

    /// Write the replay transcript as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let script = EventScript::load_from(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let transcript = replay(&script, &config.tracker)?;

    for step in &transcript.steps {
        println!(
            "{:>3} {:<24} shown={:<5} height={}",
            step.index, step.kind, step.snapshot.keyboard_shown, step.snapshot.keyboard_height
        );
    }

    let last = transcript.final_snapshot;
    println!(
        "\nFinal: shown={} height={} end=({}, {}, {}x{})",
        last.keyboard_shown,
        last.keyboard_height,
        last.coordinates.end.screen_x,
        last.coordinates.end.screen_y,
        last.coordinates.end.width,
        last.coordinates.end.height,
    );

    if let Some(path) = &args.export {
        transcript
            .export_json(path)
            .with_context(|| format!("failed to export transcript {}", path.display()))?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}
