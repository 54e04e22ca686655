//! Graph files
//!
//! A graph file lists the node count, the graph kind and its edges, each
//! with an optional weight:
//!
//! ```json
//! { "nodes": 3, "directed": false,
//!   "edges": [ {"from": 0, "to": 1, "weight": 1.5}, {"from": 1, "to": 2} ] }
//! ```
//!
//! Files ending in `.toml` are read as TOML, everything else as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ensure_node;
use crate::error::Result;
use crate::graph::{Cost, EdgeWeights, Graph, NodeId, MAX_NODES};

/// One edge of a graph file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// On-disk description of a graph and its edge weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: usize,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphFile {
    /// Read a graph file, choosing the parser from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let file: GraphFile = if is_toml {
            toml::from_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            nodes = file.nodes,
            edges = file.edges.len(),
            "graph_file_loaded"
        );
        Ok(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Describe an existing graph, taking weights from `weights` when given
    ///
    /// Undirected edges are written once, as `(s, t)` with `s <= t`.
    pub fn from_graph(graph: &Graph, weights: Option<&EdgeWeights>) -> Self {
        let edges = graph
            .edges()
            .into_iter()
            .map(|(from, to)| EdgeSpec {
                from,
                to,
                weight: weights.and_then(|w| w.get(from, to)).map(|c| c.value()),
            })
            .collect();
        GraphFile {
            nodes: graph.node_count(),
            directed: graph.is_directed(),
            edges,
        }
    }

    /// Build the graph and its weight map
    ///
    /// Weights of undirected edges apply in both directions. Every edge is
    /// checked before anything is built.
    pub fn build(&self) -> Result<(Graph, EdgeWeights)> {
        if self.nodes > MAX_NODES {
            crate::bail_invalid!(&format!("nodes (must be <= {})", MAX_NODES), self.nodes);
        }
        for edge in &self.edges {
            ensure_node!(edge.from, self.nodes);
            ensure_node!(edge.to, self.nodes);
            if let Some(weight) = edge.weight {
                if !weight.is_finite() {
                    crate::bail_invalid!(
                        &format!("weight for edge ({}, {})", edge.from, edge.to),
                        weight
                    );
                }
            }
        }

        let pairs: Vec<(NodeId, NodeId)> = self.edges.iter().map(|e| (e.from, e.to)).collect();
        let graph = Graph::from_edges(self.nodes, &pairs, self.directed)?;

        let mut weights = EdgeWeights::new();
        for edge in &self.edges {
            let Some(weight) = edge.weight else { continue };
            if self.directed {
                weights.insert(edge.from, edge.to, Cost::new(weight));
            } else {
                weights.insert_symmetric(edge.from, edge.to, Cost::new(weight));
            }
        }

        Ok((graph, weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "nodes": 4,
        "directed": false,
        "edges": [
            {"from": 0, "to": 1, "weight": 1},
            {"from": 1, "to": 2, "weight": 2.5},
            {"from": 2, "to": 3}
        ]
    }"#;

    #[test]
    fn test_build_undirected_with_weights() {
        let (graph, weights) = GraphFile::from_json_str(SAMPLE).unwrap().build().unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge(3, 2));
        assert_eq!(weights.get(2, 1), Some(Cost::new(2.5)));
        assert_eq!(weights.get(2, 3), None);
    }

    #[test]
    fn test_directed_weights_are_one_way() {
        let file = GraphFile::from_json_str(
            r#"{"nodes": 2, "directed": true, "edges": [{"from": 1, "to": 0, "weight": 3}]}"#,
        )
        .unwrap();
        let (graph, weights) = file.build().unwrap();
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 1));
        assert_eq!(weights.get(1, 0), Some(Cost::from(3)));
        assert_eq!(weights.get(0, 1), None);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let file = GraphFile::from_json_str(r#"{"nodes": 3}"#).unwrap();
        assert!(!file.directed);
        let (graph, weights) = file.build().unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert!(weights.is_empty());
    }

    #[test]
    fn test_out_of_range_edge() {
        let file =
            GraphFile::from_json_str(r#"{"nodes": 2, "edges": [{"from": 0, "to": 2}]}"#).unwrap();
        let err = file.build().unwrap_err();
        assert!(matches!(
            err,
            GraphError::NodeOutOfRange {
                node: 2,
                node_count: 2
            }
        ));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let file = GraphFile {
            nodes: 2,
            directed: false,
            edges: vec![EdgeSpec {
                from: 0,
                to: 1,
                weight: Some(f64::NAN),
            }],
        };
        assert!(matches!(
            file.build().unwrap_err(),
            GraphError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_huge_node_count_rejected() {
        let file = GraphFile::from_json_str(r#"{"nodes": 18446744073709551615}"#).unwrap();
        assert!(matches!(
            file.build().unwrap_err(),
            GraphError::InvalidValue { .. }
        ));

        let over_limit = GraphFile {
            nodes: MAX_NODES + 1,
            directed: true,
            edges: Vec::new(),
        };
        assert!(over_limit.build().is_err());
    }

    #[test]
    fn test_negative_zero_weight_is_zero() {
        let file = GraphFile::from_json_str(
            r#"{"nodes": 2, "edges": [{"from": 0, "to": 1, "weight": -0.0}]}"#,
        )
        .unwrap();
        let (_, weights) = file.build().unwrap();
        assert_eq!(weights.get(0, 1), Some(Cost::ZERO));
        assert!(weights.get(1, 0).is_some_and(|w| w.value().is_sign_positive()));
    }

    #[test]
    fn test_malformed_json() {
        let err = GraphFile::from_json_str(r#"{"nodes": -1}"#).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn test_load_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "nodes = 3\ndirected = true\n\n[[edges]]\nfrom = 0\nto = 2\nweight = 4.0\n"
        )
        .unwrap();
        let (graph, weights) = GraphFile::load(file.path()).unwrap().build().unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.edges(), vec![(0, 2)]);
        assert_eq!(weights.get(0, 2), Some(Cost::from(4)));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let loaded = GraphFile::load(file.path()).unwrap();
        assert_eq!(loaded.edges.len(), 3);
    }

    #[test]
    fn test_from_graph_matches_build() {
        let file = GraphFile::from_json_str(SAMPLE).unwrap();
        let (graph, weights) = file.build().unwrap();
        assert_eq!(GraphFile::from_graph(&graph, Some(&weights)), file);

        let unweighted = GraphFile::from_graph(&graph, None);
        assert!(unweighted.edges.iter().all(|e| e.weight.is_none()));
    }
}
