//! Path reconstruction from traversal trees and predecessor arrays

use crate::ensure_node;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Walk from `u` toward the root of `tree`, following reverse edges
///
/// Returns `[u, parent(u), ..., root]`, or stops early at `stop_at` when it
/// is an ancestor of `u` (inclusive). `tree` is any graph in which every
/// node has at most one predecessor, such as a BFS or DFS tree.
pub fn tree_ancestors(tree: &Graph, u: NodeId, stop_at: Option<NodeId>) -> Result<Vec<NodeId>> {
    ensure_node!(u, tree.node_count());

    let mut ancestors = vec![u];
    let mut current = u;
    while Some(current) != stop_at {
        match tree.rev(current).first() {
            // a walk longer than the node count means the graph is not a tree
            Some(&parent) if ancestors.len() <= tree.node_count() => {
                ancestors.push(parent);
                current = parent;
            }
            _ => break,
        }
    }
    Ok(ancestors)
}

/// Paths from `u` and from `v` up to their lowest common ancestor
///
/// Both returned paths end at the common ancestor. `None` when the nodes
/// sit in different trees of the forest.
pub fn common_ancestor_paths(
    tree: &Graph,
    u: NodeId,
    v: NodeId,
) -> Result<Option<(Vec<NodeId>, Vec<NodeId>)>> {
    let mut to_root_u = tree_ancestors(tree, u, None)?;
    let mut to_root_v = tree_ancestors(tree, v, None)?;

    let mut common = None;
    while let (Some(a), Some(b)) = (to_root_u.last(), to_root_v.last()) {
        if a != b {
            break;
        }
        common = Some(*a);
        to_root_u.pop();
        to_root_v.pop();
    }

    let Some(ancestor) = common else {
        return Ok(None);
    };
    Ok(Some((
        tree_ancestors(tree, u, Some(ancestor))?,
        tree_ancestors(tree, v, Some(ancestor))?,
    )))
}

/// Rebuild the node sequence `source..target` from a predecessor array
///
/// `None` if `target` was never reached.
pub fn reconstruct_path(
    pred: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        let parent = (*pred.get(current)?)?;
        if path.len() > pred.len() {
            return None;
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1 -> 3, 0 -> 2 -> 4, 5 isolated
    fn sample_tree() -> Graph {
        Graph::from_edges(6, &[(0, 1), (1, 3), (0, 2), (2, 4)], true).unwrap()
    }

    #[test]
    fn test_ancestors_to_root() {
        let tree = sample_tree();
        assert_eq!(tree_ancestors(&tree, 3, None).unwrap(), vec![3, 1, 0]);
        assert_eq!(tree_ancestors(&tree, 0, None).unwrap(), vec![0]);
    }

    #[test]
    fn test_ancestors_stop_at() {
        let tree = sample_tree();
        assert_eq!(tree_ancestors(&tree, 3, Some(1)).unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_ancestors_out_of_range() {
        assert!(tree_ancestors(&sample_tree(), 6, None).is_err());
    }

    #[test]
    fn test_common_ancestor_paths() {
        let tree = sample_tree();
        let (pu, pv) = common_ancestor_paths(&tree, 3, 4).unwrap().unwrap();
        assert_eq!(pu, vec![3, 1, 0]);
        assert_eq!(pv, vec![4, 2, 0]);

        let (pu, pv) = common_ancestor_paths(&tree, 3, 1).unwrap().unwrap();
        assert_eq!(pu, vec![3, 1]);
        assert_eq!(pv, vec![1]);
    }

    #[test]
    fn test_common_ancestor_different_trees() {
        let tree = sample_tree();
        assert_eq!(common_ancestor_paths(&tree, 3, 5).unwrap(), None);
    }

    #[test]
    fn test_reconstruct_path() {
        let pred = vec![None, Some(0), Some(1), Some(2), None];
        assert_eq!(reconstruct_path(&pred, 0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(reconstruct_path(&pred, 0, 0), Some(vec![0]));
        assert_eq!(reconstruct_path(&pred, 0, 4), None);
    }
}
