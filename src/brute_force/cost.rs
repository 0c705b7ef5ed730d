//! Tour cost evaluation.

use crate::matrix::DistanceMatrix;
use std::iter;

/// Cost of visiting `permutation` after starting at node 0 and then
/// returning to node 0.
///
/// Sums `matrix[prev_k][next_k]` where `prev = [0] ++ permutation` and
/// `next = permutation ++ [0]`. With column 0 zeroed the return leg is
/// free, which gives the open-tour cost.
///
/// # Examples
///
/// ```
/// use u_tsp::DistanceMatrix;
/// use u_tsp::brute_force::permutation_distance;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(permutation_distance(&dm, &[1, 2]), 6.0);
/// assert_eq!(permutation_distance(&dm.with_zeroed_column(0), &[1, 2]), 4.0);
/// ```
pub fn permutation_distance(matrix: &DistanceMatrix, permutation: &[usize]) -> f64 {
    let prev = iter::once(0).chain(permutation.iter().copied());
    let next = permutation.iter().copied().chain(iter::once(0));
    prev.zip(next).map(|(from, to)| matrix.get(from, to)).sum()
}

/// Sum of distances between consecutive nodes of an explicit tour.
///
/// No return leg is added; a closed tour must list node 0 at both ends.
pub fn tour_distance(matrix: &DistanceMatrix, tour: &[usize]) -> f64 {
    tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asymmetric() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_permutation_distance_closed() {
        let dm = asymmetric();
        // 0->1 (2) + 1->3 (4) + 3->2 (12) + 2->0 (15)
        assert_eq!(permutation_distance(&dm, &[1, 3, 2]), 33.0);
    }

    #[test]
    fn test_permutation_distance_empty_is_self_loop() {
        let mut dm = DistanceMatrix::new(1);
        dm.set(0, 0, 2.5);
        assert_eq!(permutation_distance(&dm, &[]), 2.5);
    }

    #[test]
    fn test_zeroed_column_matches_skipping_return_leg() {
        let dm = asymmetric();
        let open = dm.with_zeroed_column(0);
        for perm in [[1, 2, 3], [3, 1, 2], [2, 3, 1]] {
            let skipped = tour_distance(&dm, &[0, perm[0], perm[1], perm[2]]);
            assert_eq!(permutation_distance(&open, &perm), skipped);
        }
    }

    #[test]
    fn test_tour_distance_agrees_with_permutation_distance() {
        let dm = asymmetric();
        assert_eq!(
            tour_distance(&dm, &[0, 2, 1, 3, 0]),
            permutation_distance(&dm, &[2, 1, 3])
        );
    }

    #[test]
    fn test_tour_distance_short_tours() {
        let dm = asymmetric();
        assert_eq!(tour_distance(&dm, &[]), 0.0);
        assert_eq!(tour_distance(&dm, &[0]), 0.0);
    }
}
