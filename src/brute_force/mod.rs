//! Exhaustive (brute force) TSP solver.
//!
//! Scores every ordering of the non-origin nodes and keeps the cheapest.
//! Node 0 is fixed as the start, which cuts the search from `n!` to
//! `(n-1)!` candidates: the length of a closed tour does not depend on
//! where it starts, and open tours start at node 0 by convention.
//!
//! Open tours are solved on a copy of the matrix whose column 0 is zeroed,
//! so the same paired-sum cost covers both tour kinds.
//!
//! Cost grows factorially. Intended as a ground-truth baseline for small
//! instances, not for production routing.

mod config;
mod cost;
mod runner;
mod types;

pub use config::{BruteForceConfig, EnumerationOrder};
pub use cost::{permutation_distance, tour_distance};
pub use runner::{solve_tsp_brute_force, BruteForceRunner};
pub use types::TspSolution;
