//! Rotated isometric projection from world space to screen space.

/// A projected 2D screen coordinate with its world height carried along.
///
/// The height is kept so lighting can reconstruct face normals; it is NOT
/// a depth value and takes no part in draw ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// World-space height of the point before projection.
    pub height: f64,
}

/// Pure world-to-screen transform, fixed at construction.
///
/// Maps a world point `(x, height, z)` in three steps: translate `x` and
/// `z` by half the world extent so rotation pivots around the terrain
/// center, rotate the translated pair by the configured angle, then apply
/// the isometric projection
///
/// ```text
/// screen_x = center_x + (rx - rz) * scale
/// screen_y = center_y + (rx + rz) * scale / 2 - height * scale
/// ```
#[derive(Debug, Clone)]
pub struct IsoProjection {
    center_x: f64,
    center_y: f64,
    cos_a: f64,
    sin_a: f64,
    scale: f64,
    half_extent: f64,
}

impl IsoProjection {
    /// Create a projection.
    ///
    /// `world_extent` is the terrain's world-space edge length (grid size
    /// times tile size); it centers the rotation pivot.
    pub fn new(
        angle_deg: f64,
        canvas_width: f64,
        canvas_height: f64,
        scale: f64,
        world_extent: f64,
    ) -> Self {
        let angle_rad = angle_deg.to_radians();
        Self {
            center_x: canvas_width / 2.0,
            center_y: canvas_height / 2.0,
            cos_a: angle_rad.cos(),
            sin_a: angle_rad.sin(),
            scale,
            half_extent: world_extent / 2.0,
        }
    }

    /// Project a world point to the screen.
    pub fn project(&self, x: f64, height: f64, z: f64) -> ScreenPoint {
        let tx = x - self.half_extent;
        let tz = z - self.half_extent;

        let rx = tx * self.cos_a - tz * self.sin_a;
        let rz = tx * self.sin_a + tz * self.cos_a;

        ScreenPoint {
            x: self.center_x + (rx - rz) * self.scale,
            y: self.center_y + (rx + rz) * self.scale / 2.0 - height * self.scale,
            height,
        }
    }
}
