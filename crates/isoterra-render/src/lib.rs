//! Isometric terrain rendering: projection, per-triangle directional
//! lighting, and the redraw pipeline.
//!
//! The pipeline draws through the [`DrawSurface`] capability trait, so the
//! projection and lighting math is testable without any real rendering
//! backend. Every invocation is a full redraw: no caching, no dirty-region
//! tracking, and no state held between calls.
//!
//! Draw order is the grid's row-major iteration order. The carried height
//! on a projected point is not a depth value; overlapping geometry after
//! rotation resolves by paint order alone.

mod color;
mod params;
mod pipeline;
mod projection;
mod shading;
mod surface;

pub use color::{Color, ColorError};
pub use params::RenderParameters;
pub use pipeline::{TILE_SIZE, render_terrain};
pub use projection::{IsoProjection, ScreenPoint};
pub use shading::{face_normal, lighting, shade_triangle};
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
