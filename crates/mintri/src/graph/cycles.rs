//! Cycle enumeration: fundamental cycle basis and chordless cycles.
//!
//! Chordless cycles are reported in canonical form: rotated to start at their
//! smallest node, oriented so the second node is smaller than the last one.
//! `chordless_cycles` emits them directly in that form; `chordless_cycles_through`
//! reports raw traversal order (starting at `u`, ending at `v`) and leaves
//! canonicalization to the caller.

use std::collections::{BTreeMap, VecDeque};

use super::types::{Graph, Node};

impl Graph {
    /// Fundamental cycles of a BFS spanning forest (one per non-tree edge).
    ///
    /// Empty iff the graph is a forest.
    pub fn cycle_basis(&self) -> Vec<Vec<Node>> {
        let mut parent: BTreeMap<Node, Node> = BTreeMap::new();
        let mut depth: BTreeMap<Node, usize> = BTreeMap::new();
        for root in self.nodes() {
            if depth.contains_key(&root) {
                continue;
            }
            depth.insert(root, 0);
            let mut queue = VecDeque::from([root]);
            while let Some(x) = queue.pop_front() {
                let dx = depth[&x];
                for w in self.neighbors(x) {
                    if !depth.contains_key(&w) {
                        depth.insert(w, dx + 1);
                        parent.insert(w, x);
                        queue.push_back(w);
                    }
                }
            }
        }

        let is_tree_edge =
            |u: Node, v: Node| parent.get(&u) == Some(&v) || parent.get(&v) == Some(&u);
        let mut basis = Vec::new();
        for (u, v) in self.edges() {
            if is_tree_edge(u, v) {
                continue;
            }
            // Climb both endpoints to their lowest common ancestor.
            let (mut a, mut b) = (u, v);
            let mut left = vec![a];
            let mut right = vec![b];
            while a != b {
                if depth[&a] >= depth[&b] {
                    a = parent[&a];
                    left.push(a);
                } else {
                    b = parent[&b];
                    right.push(b);
                }
            }
            right.pop();
            left.extend(right.into_iter().rev());
            basis.push(left);
        }
        basis
    }

    /// All chordless cycles with at least 4 nodes, canonical and sorted.
    pub fn chordless_cycles(&self) -> Vec<Vec<Node>> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        for s in self.nodes() {
            for a in self.neighbors(s).filter(|&a| a > s) {
                path.clear();
                path.push(s);
                path.push(a);
                self.extend_rooted(&mut path, &mut out);
            }
        }
        out.sort();
        out
    }

    /// Extend an induced path `s, a, ..., x` whose nodes all exceed `s` (except `s`).
    fn extend_rooted(&self, path: &mut Vec<Node>, out: &mut Vec<Vec<Node>>) {
        let s = path[0];
        let x = path[path.len() - 1];
        let nexts: Vec<Node> = self.neighbors(x).filter(|&w| w > s).collect();
        for w in nexts {
            if path.contains(&w) || self.adjacent_to_any(w, &path[1..path.len() - 1]) {
                continue;
            }
            if self.has_edge(w, s) {
                // Closing here; extending past w would leave the chord w–s.
                if path.len() >= 3 && path[1] < w {
                    let mut cyc = path.clone();
                    cyc.push(w);
                    out.push(cyc);
                }
                continue;
            }
            path.push(w);
            self.extend_rooted(path, out);
            path.pop();
        }
    }

    /// Chordless cycles with at least 4 nodes that use the edge `uv`.
    ///
    /// Each is reported once, as `u, ..., v`. Empty if `uv` is not an edge.
    pub fn chordless_cycles_through(&self, u: Node, v: Node) -> Vec<Vec<Node>> {
        let mut out = Vec::new();
        if !self.has_edge(u, v) {
            return out;
        }
        let mut path = vec![u];
        self.extend_between(&mut path, v, &mut out);
        out
    }

    fn extend_between(&self, path: &mut Vec<Node>, v: Node, out: &mut Vec<Vec<Node>>) {
        let x = path[path.len() - 1];
        let nexts: Vec<Node> = self.neighbors(x).collect();
        for w in nexts {
            if w == v || path.contains(&w) || self.adjacent_to_any(w, &path[..path.len() - 1]) {
                continue;
            }
            if self.has_edge(w, v) {
                if path.len() >= 2 {
                    let mut cyc = path.clone();
                    cyc.push(w);
                    cyc.push(v);
                    out.push(cyc);
                }
                continue;
            }
            path.push(w);
            self.extend_between(path, v, out);
            path.pop();
        }
    }
}
