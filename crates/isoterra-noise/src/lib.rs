//! Seeded 3D gradient noise for procedural terrain.
//!
//! Classic permutation-table gradient noise in the Perlin style. The table
//! is shuffled by an [`isoterra_rng::Xorshift32`] stream, so the whole field
//! is a deterministic function of the seed: the same seed and the same
//! sample coordinate always yield the same value, across any number of
//! fresh constructions.

mod gradient;

pub use gradient::GradientNoise;
pub use isoterra_rng::SeedError;
