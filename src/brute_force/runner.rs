//! Brute force search loop.
//!
//! # Algorithm
//!
//! 1. Fix node 0 as the origin
//! 2. For open tours, zero column 0 on a private copy of the matrix
//! 3. Score every permutation of nodes `1..n` with [`permutation_distance`]
//! 4. Keep the first permutation with the strictly smallest cost
//! 5. Build the tour as `[0] ++ best`, plus a trailing 0 when closed

use super::config::{BruteForceConfig, EnumerationOrder};
use super::cost::permutation_distance;
use super::types::TspSolution;
use crate::error::{Result, TspError};
use crate::matrix::DistanceMatrix;
use crate::permutation::{factorial, LexPermutations};
use log::{debug, trace, warn};
use std::borrow::Cow;

/// Above this many nodes a solve runs into hundreds of millions of candidates.
const LARGE_INSTANCE: usize = 12;

/// Executes the exhaustive search.
pub struct BruteForceRunner;

impl BruteForceRunner {
    /// Finds an optimal tour for `matrix`.
    ///
    /// The matrix is never modified. Distance values are not validated:
    /// NaN or infinite entries simply never win a strict comparison.
    ///
    /// # Errors
    ///
    /// [`TspError::EmptyMatrix`] if the matrix has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::DistanceMatrix;
    /// use u_tsp::brute_force::{BruteForceConfig, BruteForceRunner};
    ///
    /// let dm = DistanceMatrix::from_rows(&[
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![1.0, 0.0, 3.0],
    ///     vec![2.0, 3.0, 0.0],
    /// ])
    /// .unwrap();
    ///
    /// let closed = BruteForceRunner::run(&dm, &BruteForceConfig::default()).unwrap();
    /// assert_eq!(closed.tour, vec![0, 1, 2, 0]);
    /// assert_eq!(closed.distance, 6.0);
    ///
    /// let open = BruteForceRunner::run(&dm, &BruteForceConfig::default().with_open_tour(true)).unwrap();
    /// assert_eq!(open.tour, vec![0, 1, 2]);
    /// assert_eq!(open.distance, 4.0);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &BruteForceConfig) -> Result<TspSolution> {
        let n = matrix.size();
        if n == 0 {
            return Err(TspError::EmptyMatrix);
        }

        let candidates = factorial(n - 1);
        if n > LARGE_INSTANCE {
            warn!("brute force on {n} nodes will score {candidates} permutations");
        }
        debug!(
            "brute force start: nodes={n}, open={}, order={:?}, candidates={candidates}",
            config.open_tour, config.order
        );

        let working: Cow<'_, DistanceMatrix> = if config.open_tour {
            Cow::Owned(matrix.with_zeroed_column(0))
        } else {
            Cow::Borrowed(matrix)
        };

        let points: Vec<usize> = (1..n).collect();
        let mut perms = match config.order {
            EnumerationOrder::Lexicographic => LexPermutations::new(points),
            EnumerationOrder::ReverseLexicographic => LexPermutations::reversed(points),
        };

        let mut best_distance = f64::INFINITY;
        let mut best_perm: Vec<usize> = Vec::with_capacity(n - 1);
        let mut evaluated = 0u64;

        while let Some(perm) = perms.advance() {
            let distance = permutation_distance(&working, perm);
            let improved = distance < best_distance;

            // The first candidate is kept even if it never beats infinity.
            if improved || evaluated == 0 {
                best_perm.clear();
                best_perm.extend_from_slice(perm);
            }
            if improved {
                best_distance = distance;
                trace!("improved at candidate {evaluated}: {best_distance} via {perm:?}");
            }
            evaluated += 1;
        }

        let mut tour = Vec::with_capacity(n + 1);
        tour.push(0);
        tour.extend_from_slice(&best_perm);
        if !config.open_tour {
            tour.push(0);
        }

        debug!("brute force done: evaluated={evaluated}, distance={best_distance}");

        Ok(TspSolution {
            tour,
            distance: best_distance,
            evaluated,
            open_tour: config.open_tour,
        })
    }
}

/// Solves TSP to optimality and returns `(tour, distance)`.
///
/// Shorthand for [`BruteForceRunner::run`] with lexicographic enumeration.
/// `open_tsp` drops the return leg to node 0.
pub fn solve_tsp_brute_force(
    matrix: &DistanceMatrix,
    open_tsp: bool,
) -> Result<(Vec<usize>, f64)> {
    let config = BruteForceConfig::default().with_open_tour(open_tsp);
    BruteForceRunner::run(matrix, &config).map(TspSolution::into_parts)
}
