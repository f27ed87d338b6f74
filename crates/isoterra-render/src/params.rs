//! Consolidated render configuration record.

use glam::DVec3;

use crate::color::Color;

/// Everything one render invocation needs, fixed for its duration.
///
/// One fully-specified record instead of optional parameters scattered
/// through call sites; [`Default`] is the reference operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    /// Terrain rotation around its center, in degrees. Default: 0.
    pub angle_deg: f64,
    /// Drawing surface width in pixels. Default: 800.
    pub canvas_width: f64,
    /// Drawing surface height in pixels. Default: 600.
    pub canvas_height: f64,
    /// Zoom scale applied by the projection. Default: 0.5.
    pub scale: f64,
    /// Multiplier mapping raw noise heights to world-space height.
    /// Default: 100.
    pub height_scale: f64,
    /// Light direction; need not be pre-normalized, it is normalized at
    /// use. Must not be the zero vector. Default: (0.5, 0.5, 0.5).
    pub light_direction: DVec3,
    /// Light intensity. Values above 1 push the lighting scalar past 1,
    /// which saturates blended colors toward the light color. Default: 0.5.
    pub light_intensity: f64,
    /// Light color blended into the base color. Default: white.
    pub light_color: Color,
    /// Water threshold in raw noise units. Rendered geometry is floored at
    /// this level and triangles averaging at or below it take the water
    /// color. Default: -0.2.
    pub water_level: f64,
    /// Base color for underwater triangles. Default: `#1e90ff`.
    pub water_color: Color,
    /// Base color for land triangles. Default: `#008000`.
    pub land_color: Color,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            scale: 0.5,
            height_scale: 100.0,
            light_direction: DVec3::new(0.5, 0.5, 0.5),
            light_intensity: 0.5,
            light_color: Color::new(255, 255, 255),
            water_level: -0.2,
            water_color: Color::new(30, 144, 255),
            land_color: Color::new(0, 128, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_match_documented_hex() {
        let params = RenderParameters::default();
        assert_eq!(params.light_color, Color::from_hex("#ffffff").unwrap());
        assert_eq!(params.water_color, Color::from_hex("#1e90ff").unwrap());
        assert_eq!(params.land_color, Color::from_hex("#008000").unwrap());
    }
}
