//! graphkit core library
//!
//! Adjacency-list graphs, an updatable priority queue, and the traversal,
//! DAG and weighted algorithms built on them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
pub mod queue;
