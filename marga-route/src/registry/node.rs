//! Waypoint node types.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Kind of waypoint, as digitized from the floor-plan artwork.
///
/// Unrecognized wire names are kept verbatim in [`NodeCategory::Other`]
/// so they survive a save and reload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeCategory {
    /// Classroom or other room destination.
    Class,
    /// Main hallway hub.
    Intersection,
    /// Corridor geometry point, never shown to users.
    Invisible,
    /// Named corridor point.
    Corridor,
    /// Stairway landing.
    Stairway,
    /// Minor hallway junction.
    Junction,
    /// Building entrance.
    Entrance,
    /// Any category this crate does not know about, with its wire name.
    Other(String),
}

impl NodeCategory {
    /// Wire name of the category.
    pub fn as_str(&self) -> &str {
        match self {
            NodeCategory::Class => "class",
            NodeCategory::Intersection => "intersection",
            NodeCategory::Invisible => "invisible",
            NodeCategory::Corridor => "corridor",
            NodeCategory::Stairway => "stairway",
            NodeCategory::Junction => "junction",
            NodeCategory::Entrance => "entrance",
            NodeCategory::Other(name) => name,
        }
    }
}

impl From<String> for NodeCategory {
    fn from(name: String) -> Self {
        match name.as_str() {
            "class" => NodeCategory::Class,
            "intersection" => NodeCategory::Intersection,
            "invisible" => NodeCategory::Invisible,
            "corridor" => NodeCategory::Corridor,
            "stairway" => NodeCategory::Stairway,
            "junction" => NodeCategory::Junction,
            "entrance" => NodeCategory::Entrance,
            _ => NodeCategory::Other(name),
        }
    }
}

impl From<NodeCategory> for String {
    fn from(category: NodeCategory) -> Self {
        match category {
            NodeCategory::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// A named waypoint on the floor plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique key within the floor.
    pub id: String,
    /// X coordinate (floor-plan units).
    pub x: f64,
    /// Y coordinate (floor-plan units).
    pub y: f64,
    /// Waypoint kind.
    #[serde(rename = "type")]
    pub category: NodeCategory,
    /// Human-readable name. Empty labels are replaced by the id on registration.
    #[serde(default)]
    pub label: String,
    /// Whether the front end offers this node as a destination.
    #[serde(default)]
    pub searchable: bool,
    /// Number of artwork markers merged into this waypoint.
    #[serde(default = "default_cluster_size")]
    pub cluster_size: u32,
}

fn default_cluster_size() -> u32 {
    1
}

impl Node {
    /// Create a non-searchable node labelled with its id.
    pub fn new(id: impl Into<String>, x: f64, y: f64, category: NodeCategory) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            x,
            y,
            category,
            searchable: false,
            cluster_size: default_cluster_size(),
        }
    }

    /// Builder-style setter for the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style setter for searchability.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Builder-style setter for cluster size.
    pub fn with_cluster_size(mut self, cluster_size: u32) -> Self {
        self.cluster_size = cluster_size;
        self
    }

    /// Node position.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Straight-line distance to another node.
    #[inline]
    pub fn distance(&self, other: &Node) -> f64 {
        self.position().distance(&other.position())
    }
}
