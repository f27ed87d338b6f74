//! Deterministic seeded pseudo-random stream for terrain generation.
//!
//! Provides [`Xorshift32`], a tiny 32-bit xorshift generator whose entire
//! output sequence is fixed by its seed. Terrain generation derives every
//! random decision from one of these streams, so a saved seed reproduces a
//! world bit-for-bit.

mod error;
mod xorshift;

pub use error::SeedError;
pub use xorshift::Xorshift32;
