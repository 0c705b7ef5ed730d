//! Brute force solver result.

/// An optimal tour and its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspSolution {
    /// Visiting order. Starts at node 0; ends at node 0 for closed tours,
    /// otherwise at the last visited node.
    pub tour: Vec<usize>,

    /// Total cost of `tour`.
    ///
    /// `f64::INFINITY` when no candidate scored below infinity (every
    /// candidate infinite or NaN).
    pub distance: f64,

    /// Number of permutations scored, `(n-1)!`.
    pub evaluated: u64,

    /// Whether the tour omits the return leg.
    pub open_tour: bool,
}

impl TspSolution {
    /// Splits into `(tour, distance)`.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.tour, self.distance)
    }
}
