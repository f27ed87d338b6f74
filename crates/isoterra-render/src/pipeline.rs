//! Full-redraw terrain render pipeline.

use isoterra_terrain::HeightGrid;
use tracing::{debug, trace};

use crate::params::RenderParameters;
use crate::projection::IsoProjection;
use crate::shading::shade_triangle;
use crate::surface::DrawSurface;

/// World-space edge length of one grid cell.
pub const TILE_SIZE: f64 = 32.0;

/// Render a height grid onto a drawing surface.
///
/// Clears the surface, then walks the grid cells in row-major order. Each
/// cell's four corner heights are scaled by `height_scale` and floored at
/// `water_level`, projected, and split into the two fixed triangles
/// `(c0, c1, c2)` and `(c1, c2, c3)`. Overlap after rotation resolves
/// purely by this paint order; there is no depth testing.
///
/// A triangle's water-or-land base color comes from the average of its
/// RAW corner heights compared against `water_level`, while the geometry
/// it is drawn with uses the scaled, floored heights. That asymmetry is
/// deliberate: the water surface floods the geometry without shifting the
/// shoreline classification.
pub fn render_terrain(
    surface: &mut dyn DrawSurface,
    grid: &HeightGrid,
    params: &RenderParameters,
) {
    surface.clear();

    let size = grid.size();
    // A grid without a full cell has nothing to draw.
    if size < 2 {
        return;
    }
    let projection = IsoProjection::new(
        params.angle_deg,
        params.canvas_width,
        params.canvas_height,
        params.scale,
        size as f64 * TILE_SIZE,
    );

    // Scaled world height, floored at the water level.
    let clamp = |h: f64| (h * params.height_scale).max(params.water_level);
    let base_color = |avg_raw: f64| {
        if avg_raw <= params.water_level {
            params.water_color
        } else {
            params.land_color
        }
    };

    let mut drawn = 0usize;
    let mut skipped = 0usize;

    for i in 0..size - 1 {
        for j in 0..size - 1 {
            let x = TILE_SIZE * i as f64;
            let z = TILE_SIZE * j as f64;

            let h00 = grid.get(i, j);
            let h10 = grid.get(i + 1, j);
            let h01 = grid.get(i, j + 1);
            let h11 = grid.get(i + 1, j + 1);

            let c0 = projection.project(x, clamp(h00), z);
            let c1 = projection.project(x + TILE_SIZE, clamp(h10), z);
            let c2 = projection.project(x, clamp(h01), z + TILE_SIZE);
            let c3 = projection.project(x + TILE_SIZE, clamp(h11), z + TILE_SIZE);

            let upper = base_color((h00 + h10 + h01) / 3.0);
            let lower = base_color((h10 + h01 + h11) / 3.0);

            for (tri, color) in [([c0, c1, c2], upper), ([c1, c2, c3], lower)] {
                if shade_triangle(surface, tri, color, params) {
                    drawn += 1;
                } else {
                    skipped += 1;
                    trace!(i, j, "skipped degenerate triangle");
                }
            }
        }
    }

    debug!(
        grid_size = size,
        triangles = drawn,
        degenerate = skipped,
        "rendered terrain"
    );
}
