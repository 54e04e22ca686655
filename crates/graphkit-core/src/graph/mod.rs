//! Graph representation and algorithms
//!
//! - `adjacency`: the adjacency-list [`Graph`]
//! - `types`: node ids, edge costs and weight maps
//! - `path`: walking traversal trees and predecessor arrays
//! - `algos`: BFS, DFS, topological sort, cycle search, Hamiltonian path,
//!   Dijkstra and Prim

pub mod adjacency;
pub mod algos;
pub mod path;
pub mod types;

pub use adjacency::Graph;
pub use algos::{
    bfs, dfs, dijkstra, find_cycle, hamiltonian_path_dag, is_connected, is_dag, prim,
    topological_sort, BfsTree, DfsTree, ShortestPaths, SpanningTree, TopoOrder,
};
pub use path::{common_ancestor_paths, reconstruct_path, tree_ancestors};
pub use types::{Cost, EdgeWeights, NodeId, WeightedOptions, MAX_NODES};
