//! Configuration structs with documented defaults and RON persistence.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::DVec3;
use isoterra_render::{Color, RenderParameters};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation settings.
    pub generation: GenerationConfig,
    /// Projection and surface settings.
    pub render: RenderConfig,
    /// Directional light settings.
    pub light: LightConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Noise seed. `None` derives a non-zero seed from the clock at
    /// startup, so unseeded runs still log a reproducible value.
    pub seed: Option<i32>,
    /// Frequency divisor; larger is smoother terrain.
    pub scale_factor: f64,
    /// Samples per grid edge.
    pub grid_size: usize,
}

/// Projection and surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Terrain rotation in degrees.
    pub angle_deg: f64,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Zoom scale.
    pub zoom: f64,
    /// Raw-noise-to-world height multiplier.
    pub height_scale: f64,
    /// Water threshold in raw noise units.
    pub water_level: f64,
    /// Land base color as `#rrggbb`.
    pub land_color: String,
    /// Water base color as `#rrggbb`.
    pub water_color: String,
}

/// Directional light configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    /// Light direction; normalized at use, need not be unit length.
    pub direction: [f64; 3],
    /// Intensity multiplier.
    pub intensity: f64,
    /// Light color as `#rrggbb`.
    pub color: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the rendered image is written to.
    pub path: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g. "debug", "isoterra_render=trace").
    /// Empty uses the default filter.
    pub log_level: String,
    /// Directory for the plain-text log file. Empty disables file
    /// logging.
    pub log_dir: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scale_factor: 10.0,
            grid_size: 32,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            canvas_width: 800,
            canvas_height: 600,
            zoom: 0.5,
            height_scale: 100.0,
            water_level: -0.2,
            land_color: "#008000".to_string(),
            water_color: "#1e90ff".to_string(),
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [0.5, 0.5, 0.5],
            intensity: 0.5,
            color: "#ffffff".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "terrain.png".to_string(),
        }
    }
}

impl GenerationConfig {
    /// The configured seed, or a clock-derived non-zero fallback.
    pub fn resolved_seed(&self) -> i32 {
        self.seed.unwrap_or_else(|| {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(1);
            let seed = millis as i32;
            if seed == 0 { 1 } else { seed }
        })
    }
}

impl Config {
    /// Load configuration from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&content).map_err(ConfigError::ParseError)
    }

    /// Save configuration to a RON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::default();
        let content =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)
    }

    /// Load from `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the typed per-render parameter record.
    ///
    /// Color strings are parsed here, once, so malformed colors surface as
    /// configuration errors instead of degrading mid-render.
    pub fn render_parameters(&self) -> Result<RenderParameters, ConfigError> {
        let [lx, ly, lz] = self.light.direction;
        Ok(RenderParameters {
            angle_deg: self.render.angle_deg,
            canvas_width: f64::from(self.render.canvas_width),
            canvas_height: f64::from(self.render.canvas_height),
            scale: self.render.zoom,
            height_scale: self.render.height_scale,
            light_direction: DVec3::new(lx, ly, lz),
            light_intensity: self.light.intensity,
            light_color: Color::from_hex(&self.light.color)?,
            water_level: self.render.water_level,
            water_color: Color::from_hex(&self.render.water_color)?,
            land_color: Color::from_hex(&self.render.land_color)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_render_parameters() {
        let config = Config::default();
        let params = config.render_parameters().unwrap();
        assert_eq!(params, RenderParameters::default());
    }

    #[test]
    fn test_malformed_color_is_rejected() {
        let mut config = Config::default();
        config.render.land_color = "#green".to_string();
        let err = config.render_parameters().unwrap_err();
        assert!(matches!(err, ConfigError::Color(_)));
    }

    #[test]
    fn test_resolved_seed_prefers_explicit() {
        let config = GenerationConfig {
            seed: Some(12345),
            ..Default::default()
        };
        assert_eq!(config.resolved_seed(), 12345);
    }

    #[test]
    fn test_resolved_seed_fallback_is_nonzero() {
        let config = GenerationConfig::default();
        assert_ne!(config.resolved_seed(), 0);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");

        let mut config = Config::default();
        config.generation.seed = Some(777);
        config.render.angle_deg = 45.0;
        config.light.intensity = 1.25;

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(generation: (seed: Some(9)))").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.generation.seed, Some(9));
        assert_eq!(loaded.render, RenderConfig::default());
        assert_eq!(loaded.light, LightConfig::default());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.ron");
        let loaded = Config::load_or_default(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }
}
