//! Connectivity and invariant checks over a built snapshot.
//!
//! Used as a post-build quality gate: which waypoints ended up in separate
//! islands, which destinations cannot reach each other, and whether the
//! adjacency still satisfies symmetry and Euclidean weights.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use super::snapshot::GraphSnapshot;
use crate::search::{SearchError, path_exists};

/// Connected components of a snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct ConnectivityReport {
    /// Components as node ids, each in registry order. Components are
    /// ordered by their first node.
    pub components: Vec<Vec<String>>,
    /// Nodes with no neighbors.
    pub isolated: Vec<String>,
    /// Searchable destinations with no neighbors.
    pub isolated_searchable: Vec<String>,
    #[serde(skip)]
    component_by_id: HashMap<String, usize>,
}

impl ConnectivityReport {
    /// Analyze a snapshot with breadth-first search.
    pub fn analyze(snapshot: &GraphSnapshot) -> Self {
        let n = snapshot.node_count();
        let nodes = snapshot.nodes();
        let mut membership = vec![usize::MAX; n];
        let mut components = Vec::new();

        for seed in 0..n {
            if membership[seed] != usize::MAX {
                continue;
            }
            let component = components.len();
            let mut members = vec![seed];
            let mut queue = VecDeque::from([seed]);
            membership[seed] = component;

            while let Some(current) = queue.pop_front() {
                for &(neighbor, _) in snapshot.adjacency_at(current) {
                    if membership[neighbor] == usize::MAX {
                        membership[neighbor] = component;
                        members.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }

            members.sort_unstable();
            components.push(members.into_iter().map(|i| nodes[i].id.clone()).collect());
        }

        let isolated_nodes = (0..n).filter(|&i| snapshot.adjacency_at(i).is_empty());
        let isolated: Vec<String> = isolated_nodes.clone().map(|i| nodes[i].id.clone()).collect();
        let isolated_searchable = isolated_nodes
            .filter(|&i| nodes[i].searchable)
            .map(|i| nodes[i].id.clone())
            .collect();

        if components.len() > 1 {
            log::warn!(
                "[Validation] graph has {} components, {} isolated nodes",
                components.len(),
                isolated.len()
            );
        }

        Self {
            components,
            isolated,
            isolated_searchable,
            component_by_id: nodes
                .iter()
                .map(|node| node.id.clone())
                .zip(membership)
                .collect(),
        }
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// True if every node can reach every other node.
    pub fn is_connected(&self) -> bool {
        self.components.len() <= 1
    }

    /// Index into [`components`](Self::components) of the node's component.
    pub fn component_of(&self, id: &str) -> Option<usize> {
        self.component_by_id.get(id).copied()
    }
}

/// A broken graph invariant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantViolation {
    /// `from -> to` exists but `to -> from` does not.
    MissingReverseEdge {
        /// Source id
        from: String,
        /// Neighbor id
        to: String,
    },
    /// The two directions carry different weights.
    AsymmetricWeight {
        /// Source id
        from: String,
        /// Neighbor id
        to: String,
        /// Weight of `from -> to`
        forward: f64,
        /// Weight of `to -> from`
        backward: f64,
    },
    /// Weight differs from the Euclidean distance of the endpoints.
    WeightMismatch {
        /// Source id
        from: String,
        /// Neighbor id
        to: String,
        /// Stored weight
        weight: f64,
        /// Euclidean distance
        expected: f64,
    },
    /// Weight is negative or not finite.
    InvalidWeight {
        /// Source id
        from: String,
        /// Neighbor id
        to: String,
        /// Stored weight
        weight: f64,
    },
}

/// Check symmetry and Euclidean weights, within `tolerance`.
///
/// Pair-level violations are reported once per undirected edge.
pub fn check_invariants(snapshot: &GraphSnapshot, tolerance: f64) -> Vec<InvariantViolation> {
    let nodes = snapshot.nodes();
    let mut violations = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        for &(j, weight) in snapshot.adjacency_at(i) {
            let from = || node.id.clone();
            let to = || nodes[j].id.clone();

            if !weight.is_finite() || weight < 0.0 {
                violations.push(InvariantViolation::InvalidWeight {
                    from: from(),
                    to: to(),
                    weight,
                });
                continue;
            }

            let reverse = snapshot.weight_between(j, i);
            match reverse {
                None => violations.push(InvariantViolation::MissingReverseEdge {
                    from: from(),
                    to: to(),
                }),
                Some(backward) if i < j && (backward - weight).abs() > tolerance => {
                    violations.push(InvariantViolation::AsymmetricWeight {
                        from: from(),
                        to: to(),
                        forward: weight,
                        backward,
                    })
                }
                _ => {}
            }

            let expected = node.distance(&nodes[j]);
            if (i < j || reverse.is_none()) && (weight - expected).abs() > tolerance {
                violations.push(InvariantViolation::WeightMismatch {
                    from: from(),
                    to: to(),
                    weight,
                    expected,
                });
            }
        }
    }

    violations
}

/// Ordered pairs among `ids` with no path between them.
///
/// # Errors
/// [`SearchError::ReferenceNotFound`] if an id is not in the snapshot.
pub fn unreachable_pairs<S: AsRef<str>>(
    snapshot: &GraphSnapshot,
    ids: &[S],
) -> Result<Vec<(String, String)>, SearchError> {
    let mut unreachable = Vec::new();

    for start in ids {
        for goal in ids {
            let (start, goal) = (start.as_ref(), goal.as_ref());
            if start == goal {
                continue;
            }
            if !path_exists(snapshot, start, goal)? {
                unreachable.push((start.to_string(), goal.to_string()));
            }
        }
    }

    Ok(unreachable)
}
