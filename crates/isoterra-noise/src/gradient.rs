//! Permutation-table gradient noise.

use isoterra_rng::{SeedError, Xorshift32};

/// Smooth seeded 3D gradient noise field.
///
/// Construction shuffles a 256-entry permutation table with a reverse
/// Fisher–Yates pass driven by the supplied stream, then duplicates the
/// table to 512 entries so wrap-around lookups never need a modulo. The
/// table is fixed for the life of the field.
///
/// Output is unbounded in principle but stays within roughly `[-1, 1]` in
/// practice, and is exactly zero at integer lattice points.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    perm: [usize; 512],
}

impl GradientNoise {
    /// Build a noise field from an explicit stream.
    ///
    /// The stream is consumed: the shuffle draws 255 integers from it, and
    /// the table it produces is the field's only state.
    pub fn new(mut stream: Xorshift32) -> Self {
        let mut table = [0usize; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i;
        }

        // Reverse Fisher-Yates. The euclidean remainder keeps the index
        // non-negative for negative draws, so the first 256 entries remain
        // a true permutation of 0..=255.
        for i in (1..=255usize).rev() {
            let j = stream.next_int().rem_euclid(i as i32 + 1) as usize;
            table.swap(i, j);
        }

        let mut perm = [0usize; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);
        Self { perm }
    }

    /// Build a noise field directly from a seed.
    ///
    /// Fails for seed zero, like stream construction does.
    pub fn from_seed(seed: i32) -> Result<Self, SeedError> {
        Ok(Self::new(Xorshift32::new(seed)?))
    }

    /// Sample the field at `(x, y, z)`.
    ///
    /// Computes classic gradient noise: hash the eight corners of the
    /// containing lattice cell through the permutation table, pick one of
    /// twelve gradient directions per corner, and trilinearly interpolate
    /// the corner dot products with faded weights.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let p = &self.perm;

        // Lattice cell coordinates, wrapped to the table size.
        let xi = (x.floor() as i64 & 255) as usize;
        let yi = (y.floor() as i64 & 255) as usize;
        let zi = (z.floor() as i64 & 255) as usize;

        // Fractional offsets within the cell.
        let x = x - x.floor();
        let y = y - y.floor();
        let z = z - z.floor();

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        // Hashes for the eight cell corners.
        let a = p[xi] + yi;
        let aa = p[a] + zi;
        let ab = p[a + 1] + zi;
        let b = p[xi + 1] + yi;
        let ba = p[b] + zi;
        let bb = p[b + 1] + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p[aa], x, y, z), grad(p[ba], x - 1.0, y, z)),
                lerp(u, grad(p[ab], x, y - 1.0, z), grad(p[bb], x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Sample the field on the `z = 0` plane.
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise(x, y, 0.0)
    }

    #[cfg(test)]
    pub(crate) fn permutation(&self) -> &[usize; 512] {
        &self.perm
    }
}

/// Smoothing curve `6t^5 - 15t^4 + 10t^3` with zero first and second
/// derivatives at `t = 0` and `t = 1`.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the fractional offset with one of twelve gradient
/// directions, selected by the low four bits of the corner hash.
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
