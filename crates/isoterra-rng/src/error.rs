//! Seed validation error types.

/// Errors that can occur when constructing a seeded stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// Zero is a fixed point of the xorshift step: a zero register stays
    /// zero forever, so the stream would never produce output.
    #[error("seed must not be zero")]
    ZeroSeed,
}
