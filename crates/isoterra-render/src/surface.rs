//! Drawing surface capability trait and a recording test backend.

use crate::color::Color;

/// Injected drawing capability the render pipeline draws through.
///
/// Mirrors a 2D canvas: an implicit current path built with
/// `begin_path`/`move_to`/`line_to`/`close_path`, filled or stroked with
/// the current fill/stroke colors. Implementations own the actual pixels
/// (an image buffer, a window, nothing at all); the pipeline never sees
/// them.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> f64;
    /// Surface height in pixels.
    fn height(&self) -> f64;
    /// Erase the whole surface. The pipeline always performs full redraws.
    fn clear(&mut self);
    /// Start a new path, discarding any current one.
    fn begin_path(&mut self);
    /// Move the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);
    /// Add a line segment from the cursor to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);
    /// Set the color used by [`fill`](Self::fill).
    fn set_fill_color(&mut self, color: Color);
    /// Set the color used by [`stroke`](Self::stroke).
    fn set_stroke_color(&mut self, color: Color);
    /// Fill the current path.
    fn fill(&mut self);
    /// Outline the current path.
    fn stroke(&mut self);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    SetFillColor(Color),
    SetStrokeColor(Color),
    Fill,
    Stroke,
}

/// Surface that records every call instead of drawing.
///
/// Lets tests assert on the exact draw command stream the pipeline emits
/// without any rendering backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    /// Every call, in issue order.
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create a recorder with the given logical extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Fill colors in effect at each `fill` call, in draw order.
    pub fn filled_colors(&self) -> Vec<Color> {
        let mut current = None;
        let mut filled = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::SetFillColor(c) => current = Some(*c),
                DrawOp::Fill => {
                    if let Some(c) = current {
                        filled.push(c);
                    }
                }
                _ => {}
            }
        }
        filled
    }

    /// Number of `fill` calls recorded.
    pub fn fill_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Fill).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetStrokeColor(color));
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
}
