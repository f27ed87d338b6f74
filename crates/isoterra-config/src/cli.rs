//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Isometric terrain renderer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "isoterra", about = "Seeded isometric terrain renderer")]
pub struct CliArgs {
    /// Noise seed (non-zero). Omit to derive one from the clock.
    #[arg(long)]
    pub seed: Option<i32>,

    /// Samples per grid edge.
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Noise frequency divisor; larger is smoother.
    #[arg(long)]
    pub scale_factor: Option<f64>,

    /// Rotation angle in degrees.
    #[arg(long)]
    pub angle: Option<f64>,

    /// Zoom scale.
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Light intensity.
    #[arg(long)]
    pub light_intensity: Option<f64>,

    /// Water level in raw noise units.
    #[arg(long)]
    pub water_level: Option<f64>,

    /// Output image path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for the plain-text log file.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Path to the config file (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(n) = args.grid_size {
            self.generation.grid_size = n;
        }
        if let Some(k) = args.scale_factor {
            self.generation.scale_factor = k;
        }
        if let Some(angle) = args.angle {
            self.render.angle_deg = angle;
        }
        if let Some(zoom) = args.zoom {
            self.render.zoom = zoom;
        }
        if let Some(w) = args.width {
            self.render.canvas_width = w;
        }
        if let Some(h) = args.height {
            self.render.canvas_height = h;
        }
        if let Some(intensity) = args.light_intensity {
            self.light.intensity = intensity;
        }
        if let Some(level) = args.water_level {
            self.render.water_level = level;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.display().to_string();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.log_dir {
            self.debug.log_dir = dir.display().to_string();
        }
    }
}
