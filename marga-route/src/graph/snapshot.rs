//! Immutable graph snapshot and its JSON wire form.
//!
//! In memory the graph is an index-based adjacency list over the registry
//! (`adjacency[i] = [(neighbor_idx, weight), ...]`, sorted by neighbor
//! index). On the wire it is the stable `{nodes, graph}` document:
//!
//! ```text
//! {
//!   "nodes": [{"id", "x", "y", "type", "label", "searchable", "cluster_size"}, ...],
//!   "graph": {"node_id": {"neighbor_id": weight, ...}, ...}
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{Node, NodeRegistry, RegistryError};

/// Snapshot persistence errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Node list is invalid.
    #[error("invalid node list: {0}")]
    Registry(#[from] RegistryError),

    /// Graph references a node id missing from the node list.
    #[error("graph references unknown node: {0}")]
    ReferenceNotFound(String),

    /// Edge weight is negative or not finite.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        /// Source id
        from: String,
        /// Neighbor id
        to: String,
        /// Offending weight
        weight: f64,
    },

    /// Edge weight is shorter than the straight-line distance between its
    /// endpoints, which would make the Euclidean heuristic overestimate.
    #[error("weight {weight} on edge {from} -> {to} is below the endpoint distance {distance}")]
    WeightBelowDistance {
        /// Source id
        from: String,
        /// Neighbor id
        to: String,
        /// Offending weight
        weight: f64,
        /// Euclidean distance between the endpoints
        distance: f64,
    },
}

/// Relative slack allowed when comparing a loaded weight against the
/// endpoint distance.
const DISTANCE_TOLERANCE: f64 = 1e-9;

/// Wire form of a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Nodes in registry order.
    pub nodes: Vec<Node>,
    /// Map-of-maps adjacency keyed by node id.
    #[serde(default)]
    pub graph: BTreeMap<String, BTreeMap<String, f64>>,
}

/// A built, immutable routing graph.
///
/// Cheap to share behind an `Arc`; queries only ever read it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(into = "SnapshotDocument", try_from = "SnapshotDocument")]
pub struct GraphSnapshot {
    registry: NodeRegistry,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl GraphSnapshot {
    /// Assemble a snapshot from a registry and an adjacency list.
    ///
    /// Neighbor lists are sorted by registry index.
    pub(crate) fn from_parts(registry: NodeRegistry, mut adjacency: Vec<Vec<(usize, f64)>>) -> Self {
        adjacency.resize_with(registry.len(), Vec::new);
        for neighbors in &mut adjacency {
            neighbors.sort_by_key(|&(idx, _)| idx);
        }
        Self {
            registry,
            adjacency,
        }
    }

    /// The node registry the graph was built over.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Nodes in registry order.
    pub fn nodes(&self) -> &[Node] {
        self.registry.nodes()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.registry.get(id)
    }

    /// Registry index of a node id.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.registry.index_of(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Check if the snapshot has no nodes.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Neighbors of the node at a registry index.
    #[inline]
    pub fn adjacency_at(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }

    /// Neighbors of a node as `(neighbor, weight)` pairs.
    ///
    /// Returns None for unknown ids.
    pub fn neighbors(&self, id: &str) -> Option<impl Iterator<Item = (&Node, f64)>> {
        let idx = self.index_of(id)?;
        Some(
            self.adjacency[idx]
                .iter()
                .map(|&(n, w)| (self.registry.node_at(n), w)),
        )
    }

    /// Number of neighbors of a node.
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|idx| self.adjacency[idx].len())
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;
        self.weight_between(from_idx, to_idx)
    }

    /// Weight of the edge between two registry indices, if present.
    pub fn weight_between(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency
            .get(from)?
            .binary_search_by_key(&to, |&(idx, _)| idx)
            .ok()
            .map(|pos| self.adjacency[from][pos].1)
    }

    /// Sum of edge weights along a path of node ids.
    ///
    /// Returns None if an id is unknown or two consecutive ids are not
    /// adjacent. A single-node path costs zero.
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<f64> {
        if let [only] = path {
            self.index_of(only.as_ref())?;
            return Some(0.0);
        }
        path.windows(2)
            .map(|pair| self.weight(pair[0].as_ref(), pair[1].as_ref()))
            .sum()
    }

    /// Convert to the wire document.
    pub fn to_document(&self) -> SnapshotDocument {
        let nodes = self.registry.nodes().to_vec();
        let graph = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(idx, neighbors)| {
                let inner = neighbors
                    .iter()
                    .map(|&(n, w)| (self.registry.node_at(n).id.clone(), w))
                    .collect();
                (self.registry.node_at(idx).id.clone(), inner)
            })
            .collect();
        SnapshotDocument { nodes, graph }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Write the snapshot as JSON.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        fs::write(path, self.to_json()?)?;
        log::debug!(
            "[Snapshot] saved {} nodes, {} edges to {}",
            self.node_count(),
            self.edge_count(),
            path.display()
        );
        Ok(())
    }

    /// Read a JSON snapshot.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl From<GraphSnapshot> for SnapshotDocument {
    fn from(snapshot: GraphSnapshot) -> Self {
        snapshot.to_document()
    }
}

impl TryFrom<SnapshotDocument> for GraphSnapshot {
    type Error = SnapshotError;

    /// Validates references and weights. A weight may exceed the endpoint
    /// distance but never undercut it. Nodes missing from `graph` get
    /// an empty neighbor list. Symmetry is not enforced here; see
    /// [`check_invariants`](super::check_invariants).
    fn try_from(document: SnapshotDocument) -> Result<Self, Self::Error> {
        let registry = NodeRegistry::new(document.nodes)?;
        let mut adjacency = vec![Vec::new(); registry.len()];

        for (from, neighbors) in &document.graph {
            let from_idx = registry
                .index_of(from)
                .ok_or_else(|| SnapshotError::ReferenceNotFound(from.clone()))?;

            for (to, &weight) in neighbors {
                let to_idx = registry
                    .index_of(to)
                    .ok_or_else(|| SnapshotError::ReferenceNotFound(to.clone()))?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(SnapshotError::InvalidWeight {
                        from: from.clone(),
                        to: to.clone(),
                        weight,
                    });
                }
                let distance = registry.nodes()[from_idx].distance(&registry.nodes()[to_idx]);
                if distance - weight > DISTANCE_TOLERANCE * distance.max(1.0) {
                    return Err(SnapshotError::WeightBelowDistance {
                        from: from.clone(),
                        to: to.clone(),
                        weight,
                        distance,
                    });
                }
                adjacency[from_idx].push((to_idx, weight));
            }
        }

        Ok(Self::from_parts(registry, adjacency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NodeCategory;

    fn triangle() -> GraphSnapshot {
        let registry = NodeRegistry::new(vec![
            Node::new("a", 0.0, 0.0, NodeCategory::Class),
            Node::new("b", 3.0, 4.0, NodeCategory::Junction),
            Node::new("c", 6.0, 8.0, NodeCategory::Class),
            Node::new("lonely", 100.0, 100.0, NodeCategory::Stairway),
        ])
        .unwrap();
        let adjacency = vec![
            vec![(1, 5.0)],
            vec![(2, 5.0), (0, 5.0)],
            vec![(1, 5.0)],
            vec![],
        ];
        GraphSnapshot::from_parts(registry, adjacency)
    }

    #[test]
    fn test_queries() {
        let snapshot = triangle();
        assert_eq!(snapshot.node_count(), 4);
        assert_eq!(snapshot.edge_count(), 2);
        assert_eq!(snapshot.degree("b"), Some(2));
        assert_eq!(snapshot.degree("lonely"), Some(0));
        assert_eq!(snapshot.degree("ghost"), None);
        assert_eq!(snapshot.weight("a", "b"), Some(5.0));
        assert_eq!(snapshot.weight("a", "c"), None);
        // Neighbor lists are sorted by registry index
        assert_eq!(snapshot.adjacency_at(1), &[(0, 5.0), (2, 5.0)]);
    }

    #[test]
    fn test_neighbors() {
        let snapshot = triangle();
        let ids: Vec<&str> = snapshot
            .neighbors("b")
            .unwrap()
            .map(|(n, _)| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(snapshot.neighbors("ghost").is_none());
    }

    #[test]
    fn test_path_cost() {
        let snapshot = triangle();
        assert_eq!(snapshot.path_cost(&["a", "b", "c"]), Some(10.0));
        assert_eq!(snapshot.path_cost(&["a"]), Some(0.0));
        assert_eq!(snapshot.path_cost(&["a", "c"]), None);
        assert_eq!(snapshot.path_cost(&["ghost"]), None);
    }

    #[test]
    fn test_document_shape() {
        let value = serde_json::to_value(triangle()).unwrap();
        assert_eq!(value["nodes"][0]["id"], "a");
        assert_eq!(value["nodes"][1]["type"], "junction");
        assert_eq!(value["graph"]["b"]["c"], 5.0);
        // Isolated nodes keep an (empty) entry
        assert!(value["graph"]["lonely"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_json_round_trip_preserves_graph() {
        let snapshot = triangle();
        let restored = GraphSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored.to_document(), snapshot.to_document());
    }

    #[test]
    fn test_unknown_category_survives_save_and_load() {
        let json = r#"{
            "nodes": [
                {"id": "lift_1", "x": 0.0, "y": 0.0, "type": "elevator"},
                {"id": "hall", "x": 3.0, "y": 4.0, "type": "junction"}
            ],
            "graph": {"lift_1": {"hall": 5.0}, "hall": {"lift_1": 5.0}}
        }"#;
        let snapshot = GraphSnapshot::from_json(json).unwrap();

        let file = tempfile::NamedTempFile::new().unwrap();
        snapshot.save(file.path()).unwrap();
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(saved["nodes"][0]["type"], "elevator");

        let loaded = GraphSnapshot::load(file.path()).unwrap();
        assert_eq!(
            loaded.node("lift_1").unwrap().category,
            NodeCategory::Other("elevator".to_string())
        );
        assert_eq!(loaded.to_document(), snapshot.to_document());
    }

    #[test]
    fn test_missing_graph_entries_filled() {
        let json = r#"{
            "nodes": [
                {"id": "a", "x": 0.0, "y": 0.0, "type": "class"},
                {"id": "b", "x": 1.0, "y": 0.0, "type": "class"}
            ],
            "graph": {"a": {"b": 1.0}}
        }"#;
        let snapshot = GraphSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.degree("b"), Some(0));
        assert_eq!(snapshot.to_document().graph.len(), 2);
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let json = r#"{
            "nodes": [{"id": "a", "x": 0.0, "y": 0.0, "type": "class"}],
            "graph": {"a": {"ghost": 1.0}}
        }"#;
        match GraphSnapshot::from_json(json) {
            Err(SnapshotError::ReferenceNotFound(id)) => assert_eq!(id, "ghost"),
            other => panic!("expected ReferenceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let json = r#"{
            "nodes": [
                {"id": "a", "x": 0.0, "y": 0.0, "type": "class"},
                {"id": "b", "x": 1.0, "y": 0.0, "type": "class"}
            ],
            "graph": {"a": {"b": -1.0}, "b": {"a": -1.0}}
        }"#;
        assert!(matches!(
            GraphSnapshot::from_json(json),
            Err(SnapshotError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_weight_below_distance_rejected() {
        // A shortcut cheaper than the straight line would let A* settle
        // s -> g at 15 while s -> m -> g costs 2.
        let json = r#"{
            "nodes": [
                {"id": "s", "x": 0.0, "y": 0.0, "type": "junction"},
                {"id": "g", "x": 10.0, "y": 0.0, "type": "junction"},
                {"id": "m", "x": 0.0, "y": 100.0, "type": "junction"}
            ],
            "graph": {
                "s": {"m": 1.0, "g": 15.0},
                "m": {"s": 1.0, "g": 1.0},
                "g": {"m": 1.0, "s": 15.0}
            }
        }"#;
        match GraphSnapshot::from_json(json) {
            Err(SnapshotError::WeightBelowDistance { weight, distance, .. }) => {
                assert_eq!(weight, 1.0);
                assert!(distance > 99.0);
            }
            other => panic!("expected WeightBelowDistance, got {:?}", other),
        }
    }

    #[test]
    fn test_weight_above_distance_accepted() {
        let json = r#"{
            "nodes": [
                {"id": "a", "x": 0.0, "y": 0.0, "type": "class"},
                {"id": "b", "x": 3.0, "y": 4.0, "type": "class"}
            ],
            "graph": {"a": {"b": 7.5}, "b": {"a": 5.0}}
        }"#;
        let snapshot = GraphSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.weight("a", "b"), Some(7.5));
        assert_eq!(snapshot.weight("b", "a"), Some(5.0));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let json = r#"{
            "nodes": [
                {"id": "a", "x": 0.0, "y": 0.0, "type": "class"},
                {"id": "a", "x": 1.0, "y": 0.0, "type": "class"}
            ],
            "graph": {}
        }"#;
        assert!(matches!(
            GraphSnapshot::from_json(json),
            Err(SnapshotError::Registry(RegistryError::DuplicateId(_)))
        ));
    }
}
