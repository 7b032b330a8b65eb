//! Cycle splitter: cut a cycle along one of its chords.

use crate::graph::Node;

/// Split `cycle` at the chord `(u, v)` into two arcs, each closed by the chord.
///
/// With `i < j` the positions of the endpoints, the arcs are
/// `cycle[..=i] ++ cycle[j..]` and `cycle[i..=j]`. The split is positional;
/// callers canonicalize before comparing cycles.
///
/// Returns `None` if either endpoint is missing from the cycle.
pub fn split_cycle(cycle: &[Node], u: Node, v: Node) -> Option<[Vec<Node>; 2]> {
    let iu = cycle.iter().position(|&x| x == u)?;
    let iv = cycle.iter().position(|&x| x == v)?;
    let (i, j) = (iu.min(iv), iu.max(iv));
    debug_assert!(
        j - i >= 2 && !(i == 0 && j == cycle.len() - 1),
        "chord endpoints must be non-consecutive"
    );
    let mut outer = cycle[..=i].to_vec();
    outer.extend_from_slice(&cycle[j..]);
    let inner = cycle[i..=j].to_vec();
    Some([outer, inner])
}
