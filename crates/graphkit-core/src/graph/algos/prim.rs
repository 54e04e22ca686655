use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{check_source, init_frontier, next_settled};
use crate::graph::types::{Cost, EdgeWeights, NodeId, WeightedOptions};
use crate::graph::Graph;
use serde::Serialize;
use std::time::Instant;

/// Minimum spanning tree of the component containing `root`
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    pub root: NodeId,
    /// Undirected graph over all nodes holding only the tree edges
    pub tree: Graph,
    /// Parent of each node in the tree; `None` for the root and for nodes
    /// outside its component
    pub pred: Vec<Option<NodeId>>,
    pub total_weight: Cost,
}

impl SpanningTree {
    /// Tree edges as `(parent, child)`, ordered by child
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.pred
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
            .collect()
    }
}

/// Prim's algorithm from `root`
///
/// Grows the tree one node at a time, always joining the cheapest edge that
/// leaves it. Nodes not connected to `root` are left out, so on a
/// disconnected graph the result spans only the root's component.
#[tracing::instrument(skip(graph, weights, opts), fields(root = %root, nodes = graph.node_count(), rebuild_factor = opts.queue_rebuild_factor))]
pub fn prim(
    graph: &Graph,
    weights: &EdgeWeights,
    root: NodeId,
    opts: &WeightedOptions,
) -> Result<SpanningTree> {
    if graph.is_directed() {
        return Err(GraphError::requires_undirected("minimum spanning tree"));
    }
    check_source(graph, root)?;
    let start = Instant::now();

    let mut tree = Graph::new(graph.node_count(), false);
    let mut pred: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut joined = vec![false; graph.node_count()];
    let mut total_weight = Cost::ZERO;
    let mut frontier = init_frontier(graph, root, opts);

    while let Some((u, link)) = next_settled(&mut frontier) {
        joined[u] = true;
        if let Some(parent) = pred[u] {
            tree.add_edge(parent, u)?;
            total_weight = total_weight + link;
        }

        for &v in graph.adj(u) {
            if joined[v] {
                continue;
            }
            let weight = weights.require(u, v)?;
            if frontier.get(&v).is_some_and(|best| weight < *best) {
                frontier.set_priority(v, weight);
                pred[v] = Some(u);
            }
        }
    }

    crate::trace_time!(start, "prim", edges = tree.edge_count(), total = total_weight.value());
    Ok(SpanningTree {
        root,
        tree,
        pred,
        total_weight,
    })
}
