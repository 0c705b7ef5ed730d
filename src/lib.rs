//! Exact Traveling Salesman solver by exhaustive search.
//!
//! Scores all `(n-1)!` orderings of the non-origin nodes and returns the
//! optimal tour, for closed tours (return to node 0) and open tours (no
//! return leg). Meant for small instances where exactness matters more
//! than speed, typically as a ground-truth baseline for heuristics.
//!
//! - [`matrix`]: dense, possibly asymmetric distance matrix
//! - [`permutation`]: in-place lexicographic permutation enumeration
//! - [`brute_force`]: the solver, its configuration and cost helpers
//!
//! # Examples
//!
//! ```
//! use u_tsp::{solve_tsp_brute_force, DistanceMatrix};
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     vec![0.0, 1.0, 2.0],
//!     vec![1.0, 0.0, 3.0],
//!     vec![2.0, 3.0, 0.0],
//! ])?;
//! let (tour, distance) = solve_tsp_brute_force(&dm, false)?;
//! assert_eq!(tour, vec![0, 1, 2, 0]);
//! assert_eq!(distance, 6.0);
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! # Logging
//!
//! Progress is reported through the [`log`] facade (`debug` per solve,
//! `trace` per improvement, `warn` for very large instances). No logger is
//! installed by this crate.

pub mod brute_force;
pub mod error;
pub mod matrix;
pub mod permutation;

pub use brute_force::{solve_tsp_brute_force, BruteForceConfig, BruteForceRunner, TspSolution};
pub use error::{Result, TspError};
pub use matrix::DistanceMatrix;
