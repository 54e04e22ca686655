use crate::graph::algos::topo::topological_sort;
use crate::graph::types::NodeId;
use crate::graph::Graph;

/// Hamiltonian path of a DAG, if one exists
///
/// A DAG has a Hamiltonian path exactly when consecutive nodes of its
/// topological order are joined by edges, and that path is then unique.
/// Returns `None` for graphs with a cycle and for DAGs without such a path.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn hamiltonian_path_dag(graph: &Graph) -> Option<Vec<NodeId>> {
    let sorted = topological_sort(graph);
    if !sorted.is_complete() || sorted.order.is_empty() {
        return None;
    }

    if graph.is_path(&sorted.order) {
        Some(sorted.order)
    } else {
        None
    }
}
