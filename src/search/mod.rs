//! Construction and improvement algorithms for the L(p,q)-labeling problem.

/// deterministic greedy construction (static degree ordering)
pub mod greedy;

/// randomized GRASP construction (restricted candidate list) and orchestrator
pub mod grasp;

/// reactive GRASP with adaptive alpha selection and incremental costs
pub mod reactive;

/// descent local search reducing the maximum color used
pub mod local_search;
