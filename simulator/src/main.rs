//! Dashboard simulator for desktop platforms.
//!
//! Renders the built-in sample dashboards (or one dashboard described by a
//! JSON file) into an `embedded-graphics-simulator` display and saves each
//! frame as a PNG.
//!
//! ```text
//! simulator --out-dir output --scale 2
//! simulator --config demos/home.json --states demos/states.json
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod samples;
mod state;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_widgets::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use dashboard_widgets::{Dashboard, DashboardConfig, StateSnapshot};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::{debug, info};

use crate::state::mock_states;

/// Render widget dashboards to PNG.
#[derive(Debug, Parser)]
#[command(name = "simulator", version, about)]
struct Args {
    /// Directory the PNG files are written to.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Render this dashboard JSON instead of the built-in samples.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Entity states as JSON (`{"sensor.cpu": {"state": "42"}}`); defaults to mock data.
    #[arg(long)]
    states: Option<PathBuf>,

    /// Pixel upscaling of the saved images.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    let states = match &args.states {
        Some(path) => read_json::<StateSnapshot>(path)?,
        None => mock_states(),
    };
    debug!("{} entities loaded", states.len());

    if let Some(path) = &args.config {
        let config: DashboardConfig = read_json(path)?;
        let dashboard =
            Dashboard::from_config(&config).with_context(|| format!("invalid dashboard {}", path.display()))?;
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("dashboard");
        let out = args.out_dir.join(format!("{name}.png"));
        render_png(&dashboard, &states, Size::new(config.width, config.height), args.scale, &out)?;
        return Ok(());
    }

    let canvas = Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    for sample in samples::all()? {
        let out = args.out_dir.join(format!("{}.png", sample.name));
        render_png(&sample.dashboard, &states, canvas, args.scale, &out)?;
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Render one frame into a simulator display and save it as PNG.
fn render_png(
    dashboard: &Dashboard,
    states: &StateSnapshot,
    size: Size,
    scale: u32,
    path: &Path,
) -> Result<()> {
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(size);
    display.clear(dashboard.theme().background).ok();
    dashboard.render(&mut display, states);

    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        "{} layout, {} theme, {}x{} -> {}",
        dashboard.layout().name(),
        dashboard.theme().name,
        size.width,
        size.height,
        path.display()
    );
    Ok(())
}
