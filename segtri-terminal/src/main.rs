/// segtri terminal report
///
/// Loads a scene description (or the built-in default scene), runs one
/// transform/collision cycle and prints the screen-space result.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use segtri_core::{parse_scene, SceneParams};
use segtri_terminal::TerminalApp;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Segment/triangle collision report")]
struct Args {
    /// Scene description file. Built-in defaults are used if omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// List every grid line in screen space.
    #[arg(long)]
    grid: bool,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: Option<&PathBuf>) -> Result<SceneParams> {
    let Some(path) = path else {
        return Ok(SceneParams::default());
    };
    debug!(path = %path.display(), "loading scene");
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    parse_scene(&text).with_context(|| format!("invalid scene file {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scene = load_scene(args.scene.as_ref())?;
    TerminalApp::new(scene)
        .list_grid(args.grid)
        .run()
        .context("failed to compute frame")?;
    Ok(())
}
