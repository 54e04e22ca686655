//! Adjacency-list graph over dense node ids
//!
//! Undirected graphs hold edge `(s,t)` if and only if they hold `(t,s)`.
//! A directed graph may hold `(s,t)` without `(t,s)`. The reverse lists are
//! always the exact transpose of the forward lists, and both are kept sorted
//! so that every traversal visits neighbors in ascending order.

use std::fmt;
use std::ops::Range;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::ensure_node;
use crate::error::Result;
use crate::graph::types::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<NodeId>>,
    rev: Vec<Vec<NodeId>>,
    directed: bool,
}

/// Insert into a sorted list, returning false if already present
fn insert_sorted(list: &mut Vec<NodeId>, node: NodeId) -> bool {
    match list.binary_search(&node) {
        Ok(_) => false,
        Err(pos) => {
            list.insert(pos, node);
            true
        }
    }
}

fn remove_sorted(list: &mut Vec<NodeId>, node: NodeId) -> bool {
    match list.binary_search(&node) {
        Ok(pos) => {
            list.remove(pos);
            true
        }
        Err(_) => false,
    }
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize, directed: bool) -> Self {
        Graph {
            adj: vec![Vec::new(); node_count],
            rev: vec![Vec::new(); node_count],
            directed,
        }
    }

    /// Create a graph and add every edge in `edges`
    ///
    /// All endpoints are validated before the first insertion, so an
    /// out-of-range edge never yields a half-built graph.
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId)],
        directed: bool,
    ) -> Result<Self> {
        for &(s, t) in edges {
            ensure_node!(s, node_count);
            ensure_node!(t, node_count);
        }

        let mut graph = Graph::new(node_count, directed);
        for &(s, t) in edges {
            graph.insert_arc(s, t);
            if !directed {
                graph.insert_arc(t, s);
            }
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn nodes(&self) -> Range<NodeId> {
        0..self.adj.len()
    }

    /// Number of edges; an undirected edge is counted once
    pub fn edge_count(&self) -> usize {
        let arcs: usize = self.adj.iter().map(Vec::len).sum();
        if self.directed {
            arcs
        } else {
            let loops = self.nodes().filter(|&n| self.has_edge(n, n)).count();
            (arcs + loops) / 2
        }
    }

    /// All edges in ascending `(s, t)` order
    ///
    /// Undirected edges are reported once, with `s <= t`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::new();
        for (s, targets) in self.adj.iter().enumerate() {
            for &t in targets {
                if self.directed || s <= t {
                    edges.push((s, t));
                }
            }
        }
        edges
    }

    fn check(&self, node: NodeId) -> Result<()> {
        ensure_node!(node, self.node_count());
        Ok(())
    }

    fn insert_arc(&mut self, s: NodeId, t: NodeId) {
        if insert_sorted(&mut self.adj[s], t) {
            insert_sorted(&mut self.rev[t], s);
        }
    }

    fn remove_arc(&mut self, s: NodeId, t: NodeId) {
        if remove_sorted(&mut self.adj[s], t) {
            remove_sorted(&mut self.rev[t], s);
        }
    }

    /// Add edge `(s, t)`, and `(t, s)` when undirected. Adding an existing
    /// edge is a no-op.
    pub fn add_edge(&mut self, s: NodeId, t: NodeId) -> Result<()> {
        self.check(s)?;
        self.check(t)?;
        self.insert_arc(s, t);
        if !self.directed {
            self.insert_arc(t, s);
        }
        Ok(())
    }

    /// Delete edge `(s, t)` if present, and `(t, s)` when undirected
    pub fn delete_edge(&mut self, s: NodeId, t: NodeId) -> Result<()> {
        self.check(s)?;
        self.check(t)?;
        self.remove_arc(s, t);
        if !self.directed {
            self.remove_arc(t, s);
        }
        Ok(())
    }

    /// Whether edge `(s, t)` exists; false for out-of-range ids
    pub fn has_edge(&self, s: NodeId, t: NodeId) -> bool {
        self.adj
            .get(s)
            .is_some_and(|targets| targets.binary_search(&t).is_ok())
    }

    /// Whether `t` is a predecessor of `s`, i.e. edge `(t, s)` exists
    pub fn has_edge_rev(&self, s: NodeId, t: NodeId) -> bool {
        self.rev
            .get(s)
            .is_some_and(|sources| sources.binary_search(&t).is_ok())
    }

    /// Ordered successors of `s`
    pub fn neighbors(&self, s: NodeId) -> Result<&[NodeId]> {
        self.check(s)?;
        Ok(&self.adj[s])
    }

    /// Ordered predecessors of `s`
    pub fn predecessors(&self, s: NodeId) -> Result<&[NodeId]> {
        self.check(s)?;
        Ok(&self.rev[s])
    }

    pub fn in_degree(&self, s: NodeId) -> Result<usize> {
        self.check(s)?;
        Ok(self.rev[s].len())
    }

    pub fn out_degree(&self, s: NodeId) -> Result<usize> {
        self.check(s)?;
        Ok(self.adj[s].len())
    }

    /// Out-degree for undirected graphs, in + out for directed ones
    pub fn degree(&self, s: NodeId) -> Result<usize> {
        if self.directed {
            Ok(self.out_degree(s)? + self.in_degree(s)?)
        } else {
            self.out_degree(s)
        }
    }

    /// Whether consecutive nodes of `path` are joined by edges
    ///
    /// An empty sequence is never a path; a single node always is.
    pub fn is_path(&self, path: &[NodeId]) -> bool {
        if path.is_empty() {
            return false;
        }
        if path.len() == 1 {
            return path[0] < self.node_count();
        }
        path.windows(2).all(|pair| self.has_edge(pair[0], pair[1]))
    }

    /// Whether `cycle` is a closed walk `c0 -> c1 -> ... -> c0`
    ///
    /// In an undirected graph a 2-element sequence never counts, since
    /// returning along the same edge is not a cycle.
    pub fn is_cycle(&self, cycle: &[NodeId]) -> bool {
        if cycle.is_empty() {
            return false;
        }
        if !self.directed && cycle.len() == 2 {
            return false;
        }
        let mut closed = cycle.to_vec();
        closed.push(cycle[0]);
        self.is_path(&closed)
    }

    /// A new graph with every edge reversed
    pub fn reverse(&self) -> Graph {
        Graph {
            adj: self.rev.clone(),
            rev: self.adj.clone(),
            directed: self.directed,
        }
    }

    /// Unchecked successor access for algorithms that already validated
    /// their start node
    pub(crate) fn adj(&self, s: NodeId) -> &[NodeId] {
        &self.adj[s]
    }

    pub(crate) fn rev(&self, s: NodeId) -> &[NodeId] {
        &self.rev[s]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, targets) in self.adj.iter().enumerate() {
            if node > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", node)?;
            for t in targets {
                write!(f, " {}", t)?;
            }
        }
        Ok(())
    }
}

/// Serialized as `{ "nodes", "directed", "edges" }`, the same shape graph
/// files are read from
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Graph", 3)?;
        state.serialize_field("nodes", &self.node_count())?;
        state.serialize_field("directed", &self.directed)?;
        state.serialize_field("edges", &self.edges())?;
        state.end()
    }
}
