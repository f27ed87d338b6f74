//! 32-bit xorshift generator with a fixed shift triple.

use crate::error::SeedError;

/// Deterministic 32-bit xorshift pseudo-random stream.
///
/// The generator keeps a single 32-bit register and advances it with the
/// classic 13/17/5 shift triple on every draw. Two streams constructed with
/// the same seed produce identical sequences for any number of draws; that
/// determinism is the only distributional guarantee this type makes.
///
/// The register is private, non-shared state. Clone the stream if you need
/// to fork a sequence at a known point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a stream from a non-zero seed.
    ///
    /// Negative seeds are valid; the register takes the seed's two's
    /// complement bit pattern.
    pub fn new(seed: i32) -> Result<Self, SeedError> {
        if seed == 0 {
            return Err(SeedError::ZeroSeed);
        }
        Ok(Self { state: seed as u32 })
    }

    /// Advance the register and return it as a signed 32-bit integer.
    pub fn next_int(&mut self) -> i32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x as i32
    }

    /// Advance the register and return it mapped into `(0, 1]`.
    ///
    /// The next integer is reinterpreted as unsigned and divided by
    /// `u32::MAX`. The upper endpoint is reachable (the all-ones register
    /// occurs in the xorshift orbit); exactly 0 is not, since a non-zero
    /// register never steps to zero.
    pub fn next_float(&mut self) -> f64 {
        let int = self.next_int() as u32;
        f64::from(int) / f64::from(u32::MAX)
    }
}
