//! Search configuration, results, and errors.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cost-to-go estimate used to order the open set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Straight-line distance to the goal (A*).
    #[default]
    Euclidean,
    /// Always zero (Dijkstra).
    Zero,
}

/// Path search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Heuristic. Default: Euclidean
    pub heuristic: Heuristic,
    /// Stop after this many expansions.
    /// Default: None (unbounded)
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// A* with the Euclidean heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain Dijkstra (zero heuristic).
    pub fn dijkstra() -> Self {
        Self {
            heuristic: Heuristic::Zero,
            ..Default::default()
        }
    }

    /// Set the heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Bound the number of expansions.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

/// Result of a path search.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Node ids from start to goal inclusive (empty on failure)
    pub path: Vec<String>,
    /// Sum of edge weights along the path
    pub cost: f64,
    /// Number of nodes closed during the search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(crate) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Number of hops on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reason a search returned no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathFailure {
    /// Goal is not reachable from start
    NoPath,
    /// The expansion budget ran out first
    MaxExpansionsExceeded,
}

/// Search errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal id is not in the snapshot.
    #[error("node not found: {0}")]
    ReferenceNotFound(String),
}

/// Open-set entry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub f_score: f64,
    pub node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default);
        // equal scores pop in registry order
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
