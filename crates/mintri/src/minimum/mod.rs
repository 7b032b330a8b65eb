//! Exact minimum triangulation: branch-and-bound over chords of chordless cycles.
//!
//! Purpose
//! - Find a smallest set of fill edges that makes the input graph chordal by
//!   depth-first search over chord inclusions, tracking which chordless cycles
//!   of the tentative graph are still unresolved.
//!
//! Why this design
//! - A graph is chordal iff it has no chordless cycle of length ≥ 4, so the
//!   search keeps exactly those cycles "active" and stops a branch when the
//!   count reaches zero.
//! - Chords and cycles live in append-only arenas addressed by ids. Steps only
//!   flip `in_graph` flags and each decision records what it flipped, so a
//!   backward step is an exact inverse of its forward step.
//! - Cycle splits are memoized per (cycle, chord) pair; revisiting a branch
//!   never recomputes them.
//!
//! Layout
//! - `types.rs`: ids, chord/cycle records, `CycleKey`, `SearchCfg`, `SearchStats`.
//! - `catalog.rs`: chord registry and cycle catalog.
//! - `split.rs`: pure cycle splitter.
//! - `search.rs`: the engine and convenience entry points.

mod catalog;
mod search;
mod split;
mod types;

pub use catalog::{ChordRegistry, CycleCatalog};
pub use search::{
    find_minimum_triangulation, minimum_triangulation_size, triangulate_minimum,
    MinimumTriangulation,
};
pub use split::split_cycle;
pub use types::{ChordEdge, ChordId, Cycle, CycleId, CycleKey, SearchCfg, SearchStats};

#[cfg(test)]
mod tests;
