//! Undirected simple graphs and the capabilities the triangulation algorithms consume.
//!
//! Purpose
//! - Provide one small, deterministic graph type (`Graph`) with ordered adjacency so
//!   every enumeration (nodes, neighbours, cycles) has a fixed order.
//! - Expose exactly the capabilities the exact search and the elimination game need:
//!   chordality test, cycle basis, chordless-cycle enumeration, copy-with-added-edges,
//!   neighbour query and node removal.
//!
//! Layout
//! - `types.rs`: the graph type and its mutation/query primitives.
//! - `chordal.rs`: maximum cardinality search and the perfect-elimination check.
//! - `cycles.rs`: fundamental cycle basis and chordless-cycle enumeration.

mod chordal;
mod cycles;
mod types;

pub use chordal::maximum_cardinality_order;
pub use types::{Edge, Graph, Node};
