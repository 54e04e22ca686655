use crate::error::Result;
use crate::graph::algos::shared::check_source;
use crate::graph::types::NodeId;
use crate::graph::Graph;
use serde::Serialize;
use std::collections::VecDeque;

/// Breadth-first tree and hop distances from a source node
#[derive(Debug, Clone, Serialize)]
pub struct BfsTree {
    pub source: NodeId,
    /// Directed tree over the same node set, edges point away from `source`
    pub tree: Graph,
    /// Hop count from `source`; `None` for nodes it cannot reach
    pub dist: Vec<Option<usize>>,
}

impl BfsTree {
    /// Nodes reached from the source, in ascending id order
    pub fn reached(&self) -> Vec<NodeId> {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(node, d)| d.map(|_| node))
            .collect()
    }
}

/// Perform BFS from `source`
///
/// A node is marked seen the moment it is discovered, so each node is queued
/// at most once.
#[tracing::instrument(skip(graph), fields(source = %source, nodes = graph.node_count()))]
pub fn bfs(graph: &Graph, source: NodeId) -> Result<BfsTree> {
    check_source(graph, source)?;

    let mut seen = vec![false; graph.node_count()];
    let mut dist = vec![None; graph.node_count()];
    let mut tree = Graph::new(graph.node_count(), true);
    let mut queue = VecDeque::from([source]);

    seen[source] = true;
    dist[source] = Some(0);

    while let Some(u) = queue.pop_front() {
        let next = dist[u].map(|d| d + 1);
        for &v in graph.adj(u) {
            if !seen[v] {
                seen[v] = true;
                dist[v] = next;
                tree.add_edge(u, v)?;
                queue.push_back(v);
            }
        }
    }

    let result = BfsTree { source, tree, dist };
    tracing::debug!(reached = result.reached().len(), "bfs_complete");
    Ok(result)
}

/// Whether every node is reachable from node 0
///
/// For directed graphs this checks reachability from node 0 only. The empty
/// graph counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    match bfs(graph, 0) {
        Ok(result) => result.dist.iter().all(Option::is_some),
        Err(_) => graph.node_count() == 0,
    }
}
