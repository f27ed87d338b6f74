//! Height grid generation from seeded noise.

use isoterra_noise::GradientNoise;
use isoterra_rng::SeedError;
use tracing::debug;

use crate::grid::HeightGrid;

/// Smallest grid that still contains one renderable cell.
pub const MIN_GRID_SIZE: usize = 2;

/// Errors that can occur when generating a height grid.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The seed was rejected by the underlying stream.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Fewer than 2 samples per edge leaves nothing to render.
    #[error("grid size must be at least {MIN_GRID_SIZE}, got {0}")]
    GridTooSmall(usize),
}

/// Inputs that fully determine a generated height grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParams {
    /// Non-zero seed for the noise field.
    pub seed: i32,
    /// Frequency divisor applied to grid coordinates before sampling.
    /// Larger values sample the noise more slowly, producing smoother
    /// terrain; smaller values produce rougher, higher-frequency terrain.
    /// Default: 10.0.
    pub scale_factor: f64,
    /// Samples per grid edge. Must be at least [`MIN_GRID_SIZE`].
    /// Default: 32.
    pub grid_size: usize,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale_factor: 10.0,
            grid_size: 32,
        }
    }
}

/// Samples a seeded noise field over a regular grid.
///
/// The generator owns a freshly constructed [`GradientNoise`] and is meant
/// to be discarded after producing its grid; it keeps no identity across
/// generation requests.
pub struct TerrainGenerator {
    noise: GradientNoise,
    params: TerrainParams,
}

impl TerrainGenerator {
    /// Create a generator, validating the seed and grid size.
    pub fn new(params: TerrainParams) -> Result<Self, TerrainError> {
        if params.grid_size < MIN_GRID_SIZE {
            return Err(TerrainError::GridTooSmall(params.grid_size));
        }
        let noise = GradientNoise::from_seed(params.seed)?;
        Ok(Self { noise, params })
    }

    /// Produce the height grid for the generator's parameters.
    ///
    /// Cell `(i, j)` holds `noise(i / scale_factor, j / scale_factor, 0)`.
    pub fn generate(&self) -> HeightGrid {
        let n = self.params.grid_size;
        let k = self.params.scale_factor;
        let mut values = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                values.push(self.noise.noise(i as f64 / k, j as f64 / k, 0.0));
            }
        }
        let grid = HeightGrid::from_values(n, values);
        let (lo, hi) = grid.min_max();
        debug!(
            seed = self.params.seed,
            grid_size = n,
            scale_factor = k,
            min = lo,
            max = hi,
            "generated height grid"
        );
        grid
    }

    /// Parameters this generator was built with.
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }
}

/// Generate a height grid in one call.
pub fn generate_heightmap(
    seed: i32,
    scale_factor: f64,
    grid_size: usize,
) -> Result<HeightGrid, TerrainError> {
    let generator = TerrainGenerator::new(TerrainParams {
        seed,
        scale_factor,
        grid_size,
    })?;
    Ok(generator.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_zero_seed_propagates() {
        let err = generate_heightmap(0, 10.0, 4).unwrap_err();
        assert!(matches!(err, TerrainError::Seed(SeedError::ZeroSeed)));
    }

    #[test]
    fn test_grid_too_small() {
        let err = generate_heightmap(12345, 10.0, 1).unwrap_err();
        assert!(matches!(err, TerrainError::GridTooSmall(1)));
    }

    #[test]
    fn test_grid_matches_direct_noise_sampling() {
        let seed = 424242;
        let k = 7.5;
        let n = 6;
        let grid = generate_heightmap(seed, k, n).unwrap();
        let field = GradientNoise::from_seed(seed).unwrap();
        for i in 0..n {
            for j in 0..n {
                let want = field.noise(i as f64 / k, j as f64 / k, 0.0);
                let got = grid.get(i, j);
                assert_eq!(got, want, "cell ({i}, {j}): got {got}, want {want}");
            }
        }
    }

    #[test]
    fn test_determinism_across_generators() {
        let params = TerrainParams::default();
        let a = TerrainGenerator::new(params.clone()).unwrap().generate();
        let b = TerrainGenerator::new(params).unwrap().generate();
        assert_eq!(a, b, "equal parameters must reproduce the grid exactly");
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_heightmap(12345, 10.0, 8).unwrap();
        let b = generate_heightmap(67890, 10.0, 8).unwrap();
        assert_ne!(a, b, "different seeds should produce different grids");
    }

    #[test]
    fn test_golden_grid_seed_12345() {
        // Reference fixture: seed 12345, scale factor 10, 4x4 grid.
        // Captured from an independent run of the same pipeline; guards
        // against any drift in the stream, shuffle, or noise math.
        let golden: [[f64; 4]; 4] = [
            [0.0, -0.09914400000000001, -0.188416, -0.25107599999999997],
            [
                0.007704000000000003,
                -0.0890918208,
                -0.17303296512,
                -0.22639508735999997,
            ],
            [
                0.046336000000000016,
                -0.04094980607999999,
                -0.1173921792,
                -0.16665334015999997,
            ],
            [
                0.11415600000000001,
                0.04628729856000001,
                -0.01904422144,
                -0.06993325919999996,
            ],
        ];
        let grid = generate_heightmap(12345, 10.0, 4).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let got = grid.get(i, j);
                let want = golden[i][j];
                assert!(
                    (got - want).abs() < EPSILON,
                    "cell ({i}, {j}): got {got}, want {want}"
                );
            }
        }
    }
}
