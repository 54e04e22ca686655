use crate::ensure_node;
use crate::error::Result;
use crate::graph::types::{Cost, NodeId, WeightedOptions};
use crate::graph::Graph;
use crate::queue::UpdatablePriorityQueue;

/// Check that `node` is a valid start node for a traversal of `graph`
pub fn check_source(graph: &Graph, node: NodeId) -> Result<()> {
    ensure_node!(node, graph.node_count());
    Ok(())
}

/// Queue holding every node at infinite priority except `source` at zero
///
/// Shared start state of Dijkstra and Prim.
pub fn init_frontier(
    graph: &Graph,
    source: NodeId,
    opts: &WeightedOptions,
) -> UpdatablePriorityQueue<NodeId, Cost> {
    let mut frontier = UpdatablePriorityQueue::from_items(
        graph.nodes().map(|n| (n, Cost::INFINITY)),
        opts.queue_rebuild_factor,
    );
    frontier.set_priority(source, Cost::ZERO);
    frontier
}

/// Pop the next node to settle, or `None` once only unreachable nodes
/// (infinite priority) remain
pub fn next_settled(
    frontier: &mut UpdatablePriorityQueue<NodeId, Cost>,
) -> Option<(NodeId, Cost)> {
    match frontier.pop_min() {
        Ok((node, cost)) if cost.is_finite() => Some((node, cost)),
        _ => None,
    }
}
