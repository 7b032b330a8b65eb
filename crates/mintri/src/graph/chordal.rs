//! Chordality test via maximum cardinality search (Tarjan–Yannakakis).
//!
//! MCS visits nodes so that the reverse visit order is a perfect elimination
//! ordering whenever the graph is chordal. The check then only has to verify,
//! for each node, that its earlier-visited neighbours minus the latest one are
//! adjacent to that latest one.

use std::collections::BTreeMap;

use super::types::{Graph, Node};

/// Maximum cardinality search order. Ties go to the smallest node id.
pub fn maximum_cardinality_order(g: &Graph) -> Vec<Node> {
    let mut weight: BTreeMap<Node, usize> = g.nodes().map(|v| (v, 0)).collect();
    let mut order = Vec::with_capacity(weight.len());
    // max_by_key returns the last maximum; iterate in reverse so ties pick the smallest id.
    while let Some(v) = weight
        .iter()
        .rev()
        .max_by_key(|&(_, &w)| w)
        .map(|(&v, _)| v)
    {
        weight.remove(&v);
        for w in g.neighbors(v) {
            if let Some(c) = weight.get_mut(&w) {
                *c += 1;
            }
        }
        order.push(v);
    }
    order
}

impl Graph {
    /// True if every cycle of length ≥ 4 has a chord.
    pub fn is_chordal(&self) -> bool {
        let order = maximum_cardinality_order(self);
        let position: BTreeMap<Node, usize> =
            order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for (i, &v) in order.iter().enumerate() {
            let earlier: Vec<Node> = self.neighbors(v).filter(|w| position[w] < i).collect();
            let Some(&parent) = earlier.iter().max_by_key(|w| position[*w]) else {
                continue;
            };
            if earlier
                .iter()
                .any(|&w| w != parent && !self.has_edge(w, parent))
            {
                return false;
            }
        }
        true
    }
}
