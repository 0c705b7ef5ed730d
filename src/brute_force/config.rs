//! Brute force solver configuration.

/// Order in which candidate permutations are visited.
///
/// Both orders visit the same candidates. The order only decides which
/// optimum is reported when several tie, because the first one found wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumerationOrder {
    /// Ascending lexicographic order, starting at `[1, 2, ..., n-1]`.
    #[default]
    Lexicographic,
    /// Descending lexicographic order, starting at `[n-1, ..., 2, 1]`.
    ReverseLexicographic,
}

/// Configuration for the brute force solver.
///
/// # Examples
///
/// ```
/// use u_tsp::brute_force::{BruteForceConfig, EnumerationOrder};
///
/// let config = BruteForceConfig::default()
///     .with_open_tour(true)
///     .with_order(EnumerationOrder::ReverseLexicographic);
/// assert!(config.open_tour);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForceConfig {
    /// `true` if the traveler does not return to node 0.
    pub open_tour: bool,

    /// Candidate enumeration order.
    pub order: EnumerationOrder,
}

impl BruteForceConfig {
    /// Sets whether the tour omits the return leg to node 0.
    pub fn with_open_tour(mut self, open: bool) -> Self {
        self.open_tour = open;
        self
    }

    /// Sets the candidate enumeration order.
    pub fn with_order(mut self, order: EnumerationOrder) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BruteForceConfig::default();
        assert!(!config.open_tour);
        assert_eq!(config.order, EnumerationOrder::Lexicographic);
    }

    #[test]
    fn test_builders() {
        let config = BruteForceConfig::default()
            .with_open_tour(true)
            .with_order(EnumerationOrder::ReverseLexicographic);
        assert!(config.open_tour);
        assert_eq!(config.order, EnumerationOrder::ReverseLexicographic);
    }
}
