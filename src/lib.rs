//! GRASP-based solver for the L(p,q)-labeling problem.
//!
//! An L(p,q)-labeling assigns a non-negative integer color to every vertex of
//! an undirected graph such that colors of adjacent vertices differ by at
//! least p, and colors of vertices at distance exactly 2 differ by at least q.
//! The objective is to minimize the largest color used.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// core types (parameters, solutions) and the solution checker
pub mod color;

/// graph structure with precomputed distance-2 neighborhoods
pub mod graph;

/// read DIMACS instance files
pub mod dimacs;

/// constraint evaluator (feasibility, smallest feasible color, costs)
pub mod eval;

/// construction and improvement algorithms
pub mod search;

/// helper and utility methods for executables (CSV results, exports, seeds)
pub mod util;
