//! Graph algorithm implementations
//!
//! - `bfs`: breadth-first trees, distances and connectivity
//! - `dfs`: depth-first trees on an explicit stack
//! - `topo`: topological sort by in-degree stripping
//! - `cycle`: explicit cycle extraction by back-edge search
//! - `hamiltonian`: Hamiltonian path of a DAG
//! - `dijkstra`: single-source shortest paths
//! - `prim`: minimum spanning tree
//! - `shared`: helpers used by more than one algorithm

pub mod bfs;
pub mod cycle;
pub mod dfs;
pub mod dijkstra;
pub mod hamiltonian;
pub mod prim;
pub mod shared;
pub mod topo;

pub use bfs::{bfs, is_connected, BfsTree};
pub use cycle::find_cycle;
pub use dfs::{dfs, DfsTree};
pub use dijkstra::{dijkstra, ShortestPaths};
pub use hamiltonian::hamiltonian_path_dag;
pub use prim::{prim, SpanningTree};
pub use topo::{is_dag, topological_sort, TopoOrder};
