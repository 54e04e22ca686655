use crate::error::Result;
use crate::graph::algos::shared::{check_source, init_frontier, next_settled};
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Cost, EdgeWeights, NodeId, WeightedOptions};
use crate::graph::Graph;
use serde::Serialize;
use std::time::Instant;

/// Single-source shortest path distances and predecessors
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    /// Least total weight from `source`; `None` for unreachable nodes
    pub dist: Vec<Option<Cost>>,
    /// Previous node on a shortest path; `None` for the source and
    /// unreachable nodes
    pub pred: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn distance_to(&self, target: NodeId) -> Option<Cost> {
        self.dist.get(target).copied().flatten()
    }

    /// Nodes of a shortest path `source..=target`, if `target` is reachable
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance_to(target)?;
        reconstruct_path(&self.pred, self.source, target)
    }
}

/// Dijkstra's algorithm from `source`
///
/// Every edge weight must be non-negative; this is not checked, and negative
/// weights give unspecified distances. Each settled node relaxes each of its
/// outgoing edges exactly once. An edge with no entry in `weights` fails
/// with `MissingWeight` when it is first relaxed.
#[tracing::instrument(skip(graph, weights, opts), fields(source = %source, nodes = graph.node_count(), rebuild_factor = opts.queue_rebuild_factor))]
pub fn dijkstra(
    graph: &Graph,
    weights: &EdgeWeights,
    source: NodeId,
    opts: &WeightedOptions,
) -> Result<ShortestPaths> {
    check_source(graph, source)?;
    let start = Instant::now();

    let mut dist = vec![None; graph.node_count()];
    let mut pred = vec![None; graph.node_count()];
    let mut settled = vec![false; graph.node_count()];
    let mut frontier = init_frontier(graph, source, opts);

    while let Some((u, cost_u)) = next_settled(&mut frontier) {
        settled[u] = true;
        dist[u] = Some(cost_u);

        for &v in graph.adj(u) {
            if settled[v] {
                continue;
            }
            let candidate = cost_u + weights.require(u, v)?;
            if frontier.get(&v).is_some_and(|best| candidate < *best) {
                frontier.set_priority(v, candidate);
                pred[v] = Some(u);
            }
        }
    }

    crate::trace_time!(start, "dijkstra", settled = settled.iter().filter(|s| **s).count());
    Ok(ShortestPaths { source, dist, pred })
}
