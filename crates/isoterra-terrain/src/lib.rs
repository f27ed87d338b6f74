//! Procedural height field generation: seeded gradient noise sampled over a
//! regular grid.
//!
//! The output [`HeightGrid`] is a pure function of `(seed, scale_factor,
//! grid_size)`. There is no incremental update path: any parameter change
//! regenerates the whole grid.

mod generator;
mod grid;

pub use generator::{TerrainError, TerrainGenerator, TerrainParams, generate_heightmap};
pub use grid::HeightGrid;
