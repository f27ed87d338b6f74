//! Square height matrix produced by terrain generation.

/// Immutable N×N matrix of height values.
///
/// Values are raw noise samples, nominally within `[-1, 1]` but not
/// clamped. The grid is row-major with the first index running along the
/// world x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    size: usize,
    values: Vec<f64>,
}

impl HeightGrid {
    /// Wrap a row-major value buffer.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != size * size`.
    pub fn from_values(size: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            size * size,
            "height grid needs {size}x{size} values"
        );
        Self { size, values }
    }

    /// Grid edge length in samples.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Height at grid coordinate `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index ({i}, {j}) out of bounds");
        self.values[i * self.size + j]
    }

    /// Smallest and largest height in the grid.
    ///
    /// Returns `(0.0, 0.0)` for an empty grid, which generation never
    /// produces.
    pub fn min_max(&self) -> (f64, f64) {
        let mut iter = self.values.iter().copied();
        let first = iter.next().unwrap_or(0.0);
        iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
