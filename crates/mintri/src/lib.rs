//! Minimum triangulation (minimum fill-in) of undirected graphs.
//!
//! - `minimum`: exact branch-and-bound engine over chordless cycles.
//! - `elimination`: elimination-game heuristic (upper bound, randomized best-of-k).
//! - `graph`: the graph type and the capabilities both algorithms consume.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   clarity over compatibility when changing it.

pub mod api;
pub mod cfg;
pub mod deadline;
pub mod elimination;
pub mod error;
pub mod graph;
pub mod minimum;
pub mod result;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::TriangulationError;
pub use graph::{Edge, Graph, Node};
pub use result::TriangulationResult;
