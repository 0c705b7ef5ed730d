//! Error types for distance-matrix construction and solving.

use thiserror::Error;

/// Errors reported by this crate.
///
/// Only structural problems are reported. Distance values themselves are
/// never inspected: NaN and infinite entries flow through the search as
/// ordinary numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// The matrix has no nodes, so there is no origin to anchor a tour on.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A row's length differs from the number of rows.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows (and therefore required row length).
        expected: usize,
    },

    /// Flat data whose length is not `size * size`.
    #[error("distance data has {len} entries, expected {expected} for a {size}x{size} matrix")]
    DataLength {
        /// Requested matrix size.
        size: usize,
        /// Length of the supplied data.
        len: usize,
        /// `size * size`.
        expected: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
