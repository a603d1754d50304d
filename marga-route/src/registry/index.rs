//! Id-indexed waypoint registry.

use std::collections::HashMap;

use thiserror::Error;

use super::node::{Node, NodeCategory};
use crate::core::Bounds;

/// Registry construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Two nodes share an id.
    #[error("duplicate node id: {0}")]
    DuplicateId(String),

    /// A node has a NaN or infinite coordinate.
    #[error("node {0} has a non-finite coordinate")]
    NonFiniteCoordinate(String),
}

/// The curated waypoints of one floor.
///
/// Iteration follows registry order. Lookups by id go through a hash index.
#[derive(Clone, Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    /// Build a registry, rejecting duplicate ids and non-finite coordinates.
    ///
    /// Empty labels are replaced by the node id.
    pub fn new(nodes: Vec<Node>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(nodes.len());
        let mut normalized = Vec::with_capacity(nodes.len());

        for (idx, mut node) in nodes.into_iter().enumerate() {
            if !node.position().is_finite() {
                return Err(RegistryError::NonFiniteCoordinate(node.id));
            }
            if index.insert(node.id.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateId(node.id));
            }
            if node.label.is_empty() {
                node.label = node.id.clone();
            }
            normalized.push(node);
        }

        Ok(Self {
            nodes: normalized,
            index,
        })
    }

    /// Look up a node by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Registry position of a node id.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Check if an id is registered.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Node at a registry position.
    #[inline]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All nodes as a slice.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Destinations the front end may offer in search.
    pub fn searchable(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.searchable)
    }

    /// Nodes of one category.
    pub fn by_category(&self, category: NodeCategory) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    /// Split the registry into the nodes inside `bounds` and the ids outside.
    pub fn retain_within(&self, bounds: &Bounds) -> (NodeRegistry, Vec<String>) {
        let mut kept = Vec::with_capacity(self.nodes.len());
        let mut excluded = Vec::new();

        for node in &self.nodes {
            if bounds.contains(node.position()) {
                kept.push(node.clone());
            } else {
                excluded.push(node.id.clone());
            }
        }

        let index = kept
            .iter()
            .enumerate()
            .map(|(idx, n)| (n.id.clone(), idx))
            .collect();

        (Self { nodes: kept, index }, excluded)
    }

    /// Consume the registry, returning nodes in registry order.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
