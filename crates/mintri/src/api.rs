//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI, benches and experiments. Breaking
//! changes are allowed.

// Graphs
pub use crate::graph::{maximum_cardinality_order, Edge, Graph, Node};
// Exact engine
pub use crate::minimum::{
    find_minimum_triangulation, minimum_triangulation_size, triangulate_minimum,
    MinimumTriangulation, SearchCfg, SearchStats,
};
// Heuristic
pub use crate::elimination::{
    elimination_game, triangulate_elimination_game, EliminationCfg, EliminationOrder,
};
// Results and errors
pub use crate::cfg::MAX_CYCLE_LEN;
pub use crate::error::TriangulationError;
pub use crate::result::{mean_and_variance, TriangulationResult};
