use crate::error::Result;
use crate::graph::algos::shared::check_source;
use crate::graph::types::NodeId;
use crate::graph::Graph;
use serde::Serialize;

/// Depth-first tree from a source node
#[derive(Debug, Clone, Serialize)]
pub struct DfsTree {
    pub source: NodeId,
    /// Directed tree over the same node set, edges point away from `source`
    pub tree: Graph,
    /// Nodes in the order they were first discovered
    pub order: Vec<NodeId>,
}

/// Stack frame: a node and the index of its next neighbor to inspect
struct Frame {
    node: NodeId,
    next: usize,
}

/// Perform DFS from `source` on an explicit stack
///
/// A node is seen when first discovered and explored once all of its
/// neighbors have been inspected. The tree gains edge `(u, v)` only when `v`
/// is first discovered from `u`.
#[tracing::instrument(skip(graph), fields(source = %source, nodes = graph.node_count()))]
pub fn dfs(graph: &Graph, source: NodeId) -> Result<DfsTree> {
    check_source(graph, source)?;

    let mut seen = vec![false; graph.node_count()];
    let mut explored = vec![false; graph.node_count()];
    let mut tree = Graph::new(graph.node_count(), true);
    let mut order = vec![source];
    let mut stack = vec![Frame {
        node: source,
        next: 0,
    }];
    seen[source] = true;

    while let Some(frame) = stack.last_mut() {
        let u = frame.node;
        match graph.adj(u).get(frame.next) {
            Some(&v) => {
                frame.next += 1;
                if !seen[v] {
                    seen[v] = true;
                    tree.add_edge(u, v)?;
                    order.push(v);
                    stack.push(Frame { node: v, next: 0 });
                }
            }
            None => {
                explored[u] = true;
                stack.pop();
            }
        }
    }

    debug_assert!(order.iter().all(|&n| explored[n]));
    tracing::debug!(reached = order.len(), "dfs_complete");
    Ok(DfsTree {
        source,
        tree,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undirected graph used by the traversal exercises:
    /// 0-1, 1-2, 1-3, 4-1, 4-0
    fn sample() -> Graph {
        Graph::from_edges(5, &[(0, 1), (1, 2), (1, 3), (2, 1), (3, 1), (4, 1), (4, 0)], false)
            .unwrap()
    }

    #[test]
    fn test_dfs_goes_deep_first() {
        let result = dfs(&sample(), 0).unwrap();
        // 0 -> 1 -> 2, back to 1 -> 3, back to 1 -> 4
        assert_eq!(result.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.tree.edges(), vec![(0, 1), (1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn test_dfs_differs_from_bfs() {
        let g = sample();
        let depth_first = dfs(&g, 0).unwrap();
        let breadth_first = crate::graph::bfs(&g, 0).unwrap();
        // BFS reaches 4 directly from 0; DFS reaches it through 1
        assert!(breadth_first.tree.has_edge(0, 4));
        assert!(depth_first.tree.has_edge(1, 4));
    }

    #[test]
    fn test_dfs_tree_is_spanning_for_reached_nodes() {
        let g = sample();
        for s in g.nodes() {
            let result = dfs(&g, s).unwrap();
            assert_eq!(result.order.len(), g.node_count());
            assert_eq!(result.tree.edge_count(), g.node_count() - 1);
            for v in g.nodes().filter(|&v| v != s) {
                assert_eq!(result.tree.in_degree(v).unwrap(), 1);
            }
        }
    }

    #[test]
    fn test_dfs_directed_partial() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (3, 0)], true).unwrap();
        let result = dfs(&g, 1).unwrap();
        assert_eq!(result.order, vec![1, 2]);
        assert_eq!(result.tree.edges(), vec![(1, 2)]);
    }

    #[test]
    fn test_dfs_deep_chain_does_not_recurse() {
        let n = 200_000;
        let edges: Vec<(NodeId, NodeId)> = (1..n).map(|i| (i - 1, i)).collect();
        let g = Graph::from_edges(n, &edges, true).unwrap();
        let result = dfs(&g, 0).unwrap();
        assert_eq!(result.order.len(), n);
    }

    #[test]
    fn test_dfs_source_out_of_range() {
        assert!(dfs(&sample(), 5).is_err());
    }
}
