use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for graphkit
pub fn graphkit() -> Command {
    cargo_bin_cmd!("graphkit")
}

/// Write `contents` to `name` inside `dir` and return its path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Undirected weighted sample: (0,1,1), (1,2,2), (0,2,10), (2,3,1)
#[allow(dead_code)]
pub const WEIGHTED_SAMPLE: &str = r#"{
  "nodes": 4,
  "directed": false,
  "edges": [
    {"from": 0, "to": 1, "weight": 1},
    {"from": 1, "to": 2, "weight": 2},
    {"from": 0, "to": 2, "weight": 10},
    {"from": 2, "to": 3, "weight": 1}
  ]
}"#;

/// Directed graph with a cycle 1 -> 2 -> 3 -> 1
#[allow(dead_code)]
pub const CYCLIC_SAMPLE: &str = r#"{
  "nodes": 5,
  "directed": true,
  "edges": [
    {"from": 0, "to": 1}, {"from": 1, "to": 2}, {"from": 2, "to": 3},
    {"from": 3, "to": 1}, {"from": 3, "to": 4}
  ]
}"#;

/// DAG whose topological order 2, 0, 3, 1 is a Hamiltonian path
#[allow(dead_code)]
pub const DAG_SAMPLE: &str = r#"{
  "nodes": 4,
  "directed": true,
  "edges": [
    {"from": 2, "to": 0}, {"from": 0, "to": 3}, {"from": 3, "to": 1},
    {"from": 2, "to": 3}, {"from": 0, "to": 1}
  ]
}"#;

/// Run graphkit with `args` and parse stdout as JSON
#[allow(dead_code)]
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = graphkit().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "graphkit {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
