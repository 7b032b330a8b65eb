//! Graph type: ordered adjacency sets keyed by node id.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound::{Excluded, Unbounded};

/// Node identifier. Opaque to the algorithms; only equality and order are used.
pub type Node = u32;

/// Undirected edge as a normalized `(min, max)` pair.
pub type Edge = (Node, Node);

/// Undirected simple graph (no loops, no parallel edges).
///
/// Adjacency is kept in ordered sets so iteration order is a function of the
/// node ids alone; the exact search relies on this for its tie-break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: BTreeMap<Node, BTreeSet<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Endpoints are added as nodes; loops are ignored.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut g = Self::new();
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Simple cycle `0-1-...-(k-1)-0`.
    pub fn cycle(k: u32) -> Self {
        let mut g = Self::new();
        for i in 0..k {
            g.add_edge(i, (i + 1) % k);
        }
        g
    }

    /// `rows x cols` grid; node `(r, c)` has id `r * cols + c`.
    pub fn grid(rows: u32, cols: u32) -> Self {
        let mut g = Self::new();
        for r in 0..rows {
            for c in 0..cols {
                let v = r * cols + c;
                g.add_node(v);
                if c + 1 < cols {
                    g.add_edge(v, v + 1);
                }
                if r + 1 < rows {
                    g.add_edge(v, v + cols);
                }
            }
        }
        g
    }

    pub fn add_node(&mut self, v: Node) {
        self.adj.entry(v).or_default();
    }

    /// Insert the undirected edge `uv`. Returns false for loops and existing edges.
    pub fn add_edge(&mut self, u: Node, v: Node) -> bool {
        if u == v {
            self.add_node(u);
            return false;
        }
        let fresh = self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
        fresh
    }

    /// Remove `v` and all incident edges. Returns false if `v` was absent.
    pub fn remove_node(&mut self, v: Node) -> bool {
        let Some(nbrs) = self.adj.remove(&v) else {
            return false;
        };
        for w in nbrs {
            if let Some(n) = self.adj.get_mut(&w) {
                n.remove(&v);
            }
        }
        true
    }

    #[inline]
    pub fn contains_node(&self, v: Node) -> bool {
        self.adj.contains_key(&v)
    }

    #[inline]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj.get(&u).map_or(false, |n| n.contains(&v))
    }

    /// Neighbours of `v` in ascending order (empty for unknown nodes).
    pub fn neighbors(&self, v: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj.get(&v).into_iter().flat_map(|n| n.iter().copied())
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.adj.keys().copied()
    }

    /// Edges as `(min, max)` pairs in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj
            .iter()
            .flat_map(|(&u, n)| n.range((Excluded(u), Unbounded)).map(move |&v| (u, v)))
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Copy of this graph with `extra` edges inserted.
    pub fn with_added_edges<'a, I>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut g = self.clone();
        for &(u, v) in extra {
            g.add_edge(u, v);
        }
        g
    }

    /// True if some node of `nodes` is adjacent to `w`.
    pub(crate) fn adjacent_to_any(&self, w: Node, nodes: &[Node]) -> bool {
        match self.adj.get(&w) {
            Some(n) => nodes.iter().any(|p| n.contains(p)),
            None => false,
        }
    }
}
