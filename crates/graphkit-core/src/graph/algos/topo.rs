use crate::graph::types::NodeId;
use crate::graph::Graph;
use serde::Serialize;

/// Result of in-degree stripping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopoOrder {
    /// Nodes in the order they were stripped
    pub order: Vec<NodeId>,
    /// Nodes never stripped, ascending; each lies on or is reachable from a
    /// cycle
    pub blocked: Vec<NodeId>,
}

impl TopoOrder {
    /// Whether `order` covers every node, i.e. the graph is acyclic
    pub fn is_complete(&self) -> bool {
        self.blocked.is_empty()
    }
}

/// Topological sort by repeatedly stripping nodes of in-degree zero
///
/// Runs in O(V + E). A cycle is not an error: the nodes it blocks are
/// reported in [`TopoOrder::blocked`] and `order` is then a valid order of
/// the stripped prefix only. An undirected graph behaves as its symmetric
/// directed version, so any edge blocks both endpoints.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn topological_sort(graph: &Graph) -> TopoOrder {
    let mut in_degree: Vec<usize> = graph.nodes().map(|n| graph.rev(n).len()).collect();
    let mut candidates: Vec<NodeId> = graph.nodes().filter(|&n| in_degree[n] == 0).collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(v) = candidates.pop() {
        order.push(v);
        for &u in graph.adj(v) {
            in_degree[u] -= 1;
            if in_degree[u] == 0 {
                candidates.push(u);
            }
        }
    }

    let blocked: Vec<NodeId> = graph.nodes().filter(|&n| in_degree[n] > 0).collect();
    tracing::debug!(stripped = order.len(), blocked = blocked.len(), "topological_sort");
    TopoOrder { order, blocked }
}

/// Whether `graph` is a directed acyclic graph
pub fn is_dag(graph: &Graph) -> bool {
    topological_sort(graph).order.len() == graph.node_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn position(order: &[NodeId], node: NodeId) -> usize {
        order.iter().position(|&n| n == node).unwrap()
    }

    #[test]
    fn test_topological_sort_dag() {
        let g = Graph::from_edges(6, &[(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)], true)
            .unwrap();
        let result = topological_sort(&g);
        assert!(result.is_complete());
        assert_eq!(result.order.len(), 6);
        for (u, v) in g.edges() {
            assert!(position(&result.order, u) < position(&result.order, v));
        }
        assert!(is_dag(&g));
    }

    #[test]
    fn test_topological_sort_cycle_is_not_an_error() {
        // 0 -> 1 -> 2 -> 1, 2 -> 3
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 1), (2, 3)], true).unwrap();
        let result = topological_sort(&g);
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.blocked, vec![1, 2, 3]);
        assert!(!result.is_complete());
        assert!(!is_dag(&g));
    }

    #[test]
    fn test_self_loop_blocks() {
        let g = Graph::from_edges(2, &[(1, 1)], true).unwrap();
        assert_eq!(topological_sort(&g).blocked, vec![1]);
    }

    #[test]
    fn test_undirected_graphs() {
        assert!(is_dag(&Graph::new(3, false)));
        assert!(!is_dag(&Graph::from_edges(3, &[(0, 1)], false).unwrap()));
    }

    #[test]
    fn test_empty_graph_is_dag() {
        assert!(is_dag(&Graph::new(0, true)));
    }

    fn directed_graph() -> impl Strategy<Value = Graph> {
        (1usize..12).prop_flat_map(|n| {
            proptest::collection::vec((0..n, 0..n), 0..30)
                .prop_map(move |edges| Graph::from_edges(n, &edges, true).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_full_order_iff_dag(g in directed_graph()) {
            let result = topological_sort(&g);
            let full = result.order.len() == g.node_count();
            prop_assert_eq!(full, is_dag(&g));
            prop_assert_eq!(full, crate::graph::find_cycle(&g).is_none());

            if full {
                let mut sorted = result.order.clone();
                sorted.sort_unstable();
                prop_assert_eq!(sorted, g.nodes().collect::<Vec<_>>());
                for (u, v) in g.edges() {
                    prop_assert!(position(&result.order, u) < position(&result.order, v));
                }
            }
        }
    }
}
