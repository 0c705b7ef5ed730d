//! Dense distance matrix.

use crate::error::{Result, TspError};

/// A dense n×n distance matrix stored in row-major order.
///
/// Entry `(i, j)` is the directed distance from node `i` to node `j`.
/// Symmetry and the triangle inequality are not required.
///
/// # Examples
///
/// ```
/// use u_tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 3.0);
/// assert!(dm.is_symmetric(1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix")
)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form; converted through [`DistanceMatrix::from_data`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = TspError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_data(raw.size, raw.data)
    }
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("distance matrix size {size} overflows usize"));
        Self {
            data: vec![0.0; len],
            size,
        }
    }

    /// Creates a distance matrix from flat row-major data.
    ///
    /// If `size * size` overflows, `expected` is reported as `usize::MAX`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        // no Vec<f64> can reach usize::MAX entries
        let expected = size.saturating_mul(size);
        if data.len() != expected {
            return Err(TspError::DataLength {
                size,
                len: data.len(),
                expected,
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from a slice of rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(TspError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Outgoing distances of node `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[f64] {
        let start = from * self.size;
        &self.data[start..start + self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// A NaN on either side of a pair makes the matrix asymmetric.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let diff = (self.get(i, j) - self.get(j, i)).abs();
                if diff.is_nan() || diff > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns a copy with every distance into node `col` set to zero.
    ///
    /// `self` is left untouched. Zeroing column 0 makes the return leg of a
    /// tour free, which turns a closed tour into an open one.
    pub fn with_zeroed_column(&self, col: usize) -> Self {
        let mut out = self.clone();
        for from in 0..out.size {
            out.set(from, col, 0.0);
        }
        out
    }
}
