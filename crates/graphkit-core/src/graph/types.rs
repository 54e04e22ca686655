use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Node identifier: an index in `[0, node_count)`
pub type NodeId = usize;

/// Largest node count accepted from graph files and the command line
pub const MAX_NODES: usize = 1 << 22;

/// Weight of an edge or accumulated cost of a path
///
/// Totally ordered (via `f64::total_cmp`) so it can key a heap. Weighted
/// algorithms expect non-negative values; this is not enforced here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    /// `-0.0` is stored as `0.0`
    pub fn new(cost: f64) -> Self {
        Cost(if cost == 0.0 { 0.0 } else { cost })
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(cost as f64)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost::new(cost)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge weights keyed by ordered node pair
///
/// Owned by the caller and passed alongside a [`Graph`](super::Graph) into
/// the weighted algorithms. Undirected callers should use
/// [`EdgeWeights::insert_symmetric`] so that `w(s,t) == w(t,s)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeWeights {
    weights: HashMap<(NodeId, NodeId), Cost>,
}

impl EdgeWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of the ordered pair `(s, t)`
    pub fn insert(&mut self, s: NodeId, t: NodeId, weight: impl Into<Cost>) {
        self.weights.insert((s, t), weight.into());
    }

    /// Set the weight of both `(s, t)` and `(t, s)`
    pub fn insert_symmetric(&mut self, s: NodeId, t: NodeId, weight: impl Into<Cost>) {
        let weight = weight.into();
        self.weights.insert((s, t), weight);
        self.weights.insert((t, s), weight);
    }

    pub fn get(&self, s: NodeId, t: NodeId) -> Option<Cost> {
        self.weights.get(&(s, t)).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Look up the weight of `(s, t)`, failing with `MissingWeight`
    pub(crate) fn require(&self, s: NodeId, t: NodeId) -> crate::error::Result<Cost> {
        self.get(s, t)
            .ok_or(crate::error::GraphError::MissingWeight { from: s, to: t })
    }
}

/// Options shared by the queue-driven weighted algorithms
#[derive(Debug, Clone)]
pub struct WeightedOptions {
    /// Rebuild the queue's heap once it holds this many times as many
    /// entries as there are live items
    pub queue_rebuild_factor: usize,
}

impl Default for WeightedOptions {
    fn default() -> Self {
        WeightedOptions {
            queue_rebuild_factor: crate::queue::DEFAULT_REBUILD_FACTOR,
        }
    }
}
