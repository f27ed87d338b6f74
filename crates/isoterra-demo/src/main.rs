//! Demo binary: generate a seeded terrain and render it to a PNG.
//!
//! Configuration is loaded from `config.ron` (or `--config <path>`) and
//! can be overridden per flag; run with `--help` for the full list.
//! A missing config file falls back to defaults, so
//! `cargo run -p isoterra-demo -- --seed 12345` works from a clean
//! checkout.

mod image_surface;

use std::path::{Path, PathBuf};

use clap::Parser;
use isoterra_config::{CliArgs, Config};
use isoterra_log::init_logging;
use isoterra_render::render_terrain;
use isoterra_terrain::generate_heightmap;
use tracing::{error, info};

use crate::image_surface::ImageSurface;

fn main() {
    let args = CliArgs::parse();
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config.ron"));

    let mut config = match Config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load {}: {err}", config_path.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);
    let log_dir = (!config.debug.log_dir.is_empty()).then(|| PathBuf::from(&config.debug.log_dir));
    init_logging(log_dir.as_deref(), Some(&config));

    if let Err(err) = run(&config) {
        error!("render failed: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let seed = config.generation.resolved_seed();
    info!(
        seed,
        grid_size = config.generation.grid_size,
        scale_factor = config.generation.scale_factor,
        "generating terrain"
    );
    let grid = generate_heightmap(
        seed,
        config.generation.scale_factor,
        config.generation.grid_size,
    )?;
    let (min, max) = grid.min_max();
    info!(min, max, "height grid ready");

    let params = config.render_parameters()?;
    let mut surface = ImageSurface::new(config.render.canvas_width, config.render.canvas_height);
    render_terrain(&mut surface, &grid, &params);

    let output = Path::new(&config.output.path);
    surface.save(output)?;
    info!(path = %output.display(), "wrote rendered terrain");
    Ok(())
}
