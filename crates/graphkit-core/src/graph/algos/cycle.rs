use crate::graph::types::NodeId;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Finished,
}

struct Frame {
    node: NodeId,
    next: usize,
    parent: Option<NodeId>,
}

/// Find an explicit cycle, if any
///
/// Depth-first search with three colors on an explicit stack. An edge to a
/// node that is still in progress closes a cycle: the stack suffix starting
/// at that node. In an undirected graph the edge back to the DFS parent is
/// skipped, so `a - b - a` never counts; self-loops are returned as `[u]`
/// in both kinds of graph. The result always satisfies [`Graph::is_cycle`].
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), directed = graph.is_directed()))]
pub fn find_cycle(graph: &Graph) -> Option<Vec<NodeId>> {
    let mut color = vec![Color::Unvisited; graph.node_count()];

    for start in graph.nodes() {
        if color[start] != Color::Unvisited {
            continue;
        }

        color[start] = Color::InProgress;
        let mut stack = vec![Frame {
            node: start,
            next: 0,
            parent: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let Some(&v) = graph.adj(u).get(frame.next) else {
                color[u] = Color::Finished;
                stack.pop();
                continue;
            };
            frame.next += 1;
            let parent = frame.parent;

            match color[v] {
                Color::Unvisited => {
                    color[v] = Color::InProgress;
                    stack.push(Frame {
                        node: v,
                        next: 0,
                        parent: Some(u),
                    });
                }
                Color::InProgress => {
                    if !graph.is_directed() && parent == Some(v) {
                        continue;
                    }
                    let from = stack
                        .iter()
                        .position(|f| f.node == v)
                        .expect("in-progress node is on the stack");
                    let cycle: Vec<NodeId> = stack[from..].iter().map(|f| f.node).collect();
                    tracing::debug!(length = cycle.len(), "cycle_found");
                    return Some(cycle);
                }
                Color::Finished => {}
            }
        }
    }

    None
}
