//! Per-triangle directional lighting.

use glam::DVec3;

use crate::color::Color;
use crate::params::RenderParameters;
use crate::projection::ScreenPoint;
use crate::surface::DrawSurface;

/// Unit face normal of the triangle `(p1, p2, p3)`.
///
/// Cross product of the edge vectors `p2 - p1` and `p3 - p1`, using each
/// point's screen position and carried height as the third component.
/// Returns `None` for degenerate (zero-area) triangles, whose normal has
/// no direction.
pub fn face_normal(p1: ScreenPoint, p2: ScreenPoint, p3: ScreenPoint) -> Option<DVec3> {
    let edge1 = DVec3::new(p2.x - p1.x, p2.y - p1.y, p2.height - p1.height);
    let edge2 = DVec3::new(p3.x - p1.x, p3.y - p1.y, p3.height - p1.height);
    let normal = edge1.cross(edge2);
    let length = normal.length();
    if length > 0.0 {
        Some(normal / length)
    } else {
        None
    }
}

/// Lambertian-style lighting scalar for a face.
///
/// Both vectors are normalized, then the absolute dot product is scaled by
/// `intensity`. The absolute value makes lighting double-sided: a face is
/// lit the same whichever way its normal points. The result is unbounded
/// above when `intensity > 1`.
pub fn lighting(normal: DVec3, light_direction: DVec3, intensity: f64) -> f64 {
    let n = normal.normalize();
    let l = light_direction.normalize();
    n.dot(l).abs() * intensity
}

/// Light and draw one triangle.
///
/// Computes the face normal, derives the lighting scalar, blends the base
/// color toward the light color by that scalar, and issues a filled,
/// stroked path for the triangle. Degenerate triangles are skipped
/// entirely; the return value reports whether anything was drawn.
pub fn shade_triangle(
    surface: &mut dyn DrawSurface,
    points: [ScreenPoint; 3],
    base_color: Color,
    params: &RenderParameters,
) -> bool {
    let Some(normal) = face_normal(points[0], points[1], points[2]) else {
        return false;
    };
    let light = lighting(normal, params.light_direction, params.light_intensity);
    let color = base_color.blend(params.light_color, light);

    surface.begin_path();
    surface.move_to(points[0].x, points[0].y);
    surface.line_to(points[1].x, points[1].y);
    surface.line_to(points[2].x, points[2].y);
    surface.close_path();
    surface.set_fill_color(color);
    surface.set_stroke_color(color);
    surface.fill();
    surface.stroke();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    const EPSILON: f64 = 1e-12;

    fn point(x: f64, y: f64, height: f64) -> ScreenPoint {
        ScreenPoint { x, y, height }
    }

    #[test]
    fn test_flat_triangle_normal_is_vertical() {
        // Points in the screen plane with equal heights: the normal must
        // be perpendicular to that plane.
        let n = face_normal(
            point(0.0, 0.0, 1.0),
            point(1.0, 0.0, 1.0),
            point(0.0, 1.0, 1.0),
        )
        .expect("non-degenerate triangle");
        assert!((n.x).abs() < EPSILON);
        assert!((n.y).abs() < EPSILON);
        assert!((n.z.abs() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normal_is_unit_length() {
        let n = face_normal(
            point(0.0, 0.0, 0.3),
            point(4.0, 1.0, -0.2),
            point(-1.0, 3.0, 0.9),
        )
        .unwrap();
        assert!((n.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_triangle_has_no_normal() {
        // Repeated point: one edge is zero.
        let p = point(5.0, 5.0, 0.0);
        assert_eq!(face_normal(p, p, point(1.0, 2.0, 3.0)), None);
        // Collinear points: zero area, zero cross product.
        assert_eq!(
            face_normal(
                point(0.0, 0.0, 0.0),
                point(1.0, 1.0, 1.0),
                point(2.0, 2.0, 2.0)
            ),
            None
        );
    }

    #[test]
    fn test_lighting_saturation_at_parallel() {
        // A unit vector dotted with itself is exactly 1.
        let n = DVec3::new(0.0, 0.0, 1.0);
        assert_eq!(lighting(n, n, 1.0), 1.0);
    }

    #[test]
    fn test_lighting_is_double_sided() {
        let n = DVec3::new(0.3, -0.7, 0.2);
        let l = DVec3::new(0.5, 0.5, 0.5);
        let front = lighting(n, l, 0.8);
        let back = lighting(-n, l, 0.8);
        assert!((front - back).abs() < EPSILON, "{front} vs {back}");
    }

    #[test]
    fn test_lighting_normalizes_inputs() {
        let n = DVec3::new(0.0, 0.0, 10.0);
        let l = DVec3::new(0.0, 0.0, 0.25);
        assert!((lighting(n, l, 1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_lighting_scales_with_intensity() {
        let n = DVec3::new(0.0, 1.0, 0.0);
        let scalar = lighting(n, n, 2.5);
        assert!((scalar - 2.5).abs() < EPSILON, "intensity passes through");
    }

    #[test]
    fn test_shade_triangle_emits_fill_and_stroke() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let params = RenderParameters {
            light_intensity: 0.0,
            ..Default::default()
        };
        let drawn = shade_triangle(
            &mut surface,
            [
                point(10.0, 10.0, 0.0),
                point(20.0, 10.0, 0.0),
                point(10.0, 20.0, 0.0),
            ],
            Color::new(0, 128, 0),
            &params,
        );
        assert!(drawn);
        // Zero intensity blends by ratio 0: the fill keeps the base color.
        assert_eq!(surface.filled_colors(), vec![Color::new(0, 128, 0)]);
        assert!(surface.ops.contains(&DrawOp::Stroke));
        assert!(surface.ops.contains(&DrawOp::ClosePath));
    }

    #[test]
    fn test_shade_triangle_skips_degenerate() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let p = point(10.0, 10.0, 0.0);
        let drawn = shade_triangle(
            &mut surface,
            [p, p, p],
            Color::new(0, 128, 0),
            &RenderParameters::default(),
        );
        assert!(!drawn, "degenerate triangle must be skipped");
        assert!(surface.ops.is_empty(), "nothing may be drawn for a skip");
    }

    #[test]
    fn test_full_light_blends_to_light_color() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        // Flat triangle, light straight along +z, intensity 1: the
        // lighting scalar is exactly 1 and the fill is the light color.
        let params = RenderParameters {
            light_direction: DVec3::new(0.0, 0.0, 1.0),
            light_intensity: 1.0,
            ..Default::default()
        };
        shade_triangle(
            &mut surface,
            [
                point(0.0, 0.0, 1.0),
                point(1.0, 0.0, 1.0),
                point(0.0, 1.0, 1.0),
            ],
            Color::new(0, 128, 0),
            &params,
        );
        assert_eq!(surface.filled_colors(), vec![params.light_color]);
    }
}
