//! Software-rasterizing draw surface backed by an RGBA image buffer.

use image::{Rgba, RgbaImage};
use isoterra_render::{Color, DrawSurface};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// `DrawSurface` that rasterizes into an [`RgbaImage`].
///
/// Paths are flat polygons; `fill` uses even-odd scanline filling and
/// `stroke` draws one-pixel segments between consecutive path points.
/// Coordinates outside the image are clipped per pixel.
pub struct ImageSurface {
    image: RgbaImage,
    path: Vec<(f64, f64)>,
    closed: bool,
    fill_color: Color,
    stroke_color: Color,
}

impl ImageSurface {
    /// Create a surface cleared to the background color.
    pub fn new(width: u32, height: u32) -> Self {
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            *pixel = BACKGROUND;
        }
        Self {
            image,
            path: Vec::new(),
            closed: false,
            fill_color: Color::new(0, 0, 0),
            stroke_color: Color::new(0, 0, 0),
        }
    }

    /// Consume the surface and return the rendered image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the image to `path`; the format follows the extension.
    pub fn save(&self, path: &std::path::Path) -> Result<(), image::ImageError> {
        self.image.save(path)
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image
                .put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, 255]));
        }
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil() as i64;
        if steps == 0 {
            self.put_pixel(from.0.round() as i64, from.1.round() as i64, color);
            return;
        }
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (from.0 + dx * t).round() as i64;
            let y = (from.1 + dy * t).round() as i64;
            self.put_pixel(x, y, color);
        }
    }
}

impl DrawSurface for ImageSurface {
    fn width(&self) -> f64 {
        f64::from(self.image.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.image.height())
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = BACKGROUND;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        let points = self.path.clone();
        let color = self.fill_color;

        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(_, y) in &points {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let y_start = (min_y.floor().max(0.0)) as i64;
        let y_end = (max_y.ceil().min(f64::from(self.image.height()) - 1.0)) as i64;

        let mut crossings = Vec::new();
        for y in y_start..=y_end {
            // Sample scanlines at pixel centers to keep edges stable.
            let sy = y as f64 + 0.5;
            crossings.clear();
            for k in 0..points.len() {
                let (x1, y1) = points[k];
                let (x2, y2) = points[(k + 1) % points.len()];
                if (y1 <= sy && y2 > sy) || (y2 <= sy && y1 > sy) {
                    let t = (sy - y1) / (y2 - y1);
                    crossings.push(x1 + t * (x2 - x1));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x_start = pair[0].round() as i64;
                let x_end = pair[1].round() as i64;
                for x in x_start..=x_end {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let points = self.path.clone();
        let color = self.stroke_color;
        for window in points.windows(2) {
            self.draw_line(window[0], window[1], color);
        }
        if self.closed {
            self.draw_line(points[points.len() - 1], points[0], color);
        }
    }
}
